//! [`ActorEntity`] implementation for [`Registry`].

use super::actions::{RegistryAction, RegistryActionResult};
use super::error::RegistryError;
use crate::framework::ActorEntity;
use crate::model::{Address, Registry};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Registry {
    type Id = Address;
    type CreateParams = ();
    type Action = RegistryAction;
    type ActionResult = RegistryActionResult;
    type Context = ();
    type Error = RegistryError;

    /// A registry takes no initialization arguments and starts empty.
    fn from_create_params(address: Address, _params: ()) -> Result<Self, RegistryError> {
        Ok(Self::new(address))
    }

    async fn handle_action(
        &mut self,
        action: RegistryAction,
        _ctx: &(),
    ) -> Result<RegistryActionResult, RegistryError> {
        match action {
            RegistryAction::Register { key, address } => {
                if key.is_empty() {
                    return Err(RegistryError::InvalidEntry("key must not be empty".into()));
                }
                if address.is_null() {
                    return Err(RegistryError::InvalidEntry(format!(
                        "{key} cannot point at the null address"
                    )));
                }
                if self.entries.contains_key(&key) {
                    return Err(RegistryError::NameTaken(key));
                }
                self.entries.insert(key, address);
                Ok(RegistryActionResult::Registered)
            }
            RegistryAction::Resolve(key) => self
                .entries
                .get(&key)
                .copied()
                .map(RegistryActionResult::Resolved)
                .ok_or(RegistryError::NameNotFound(key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::from_create_params(Address::from_raw(1), ()).unwrap()
    }

    #[tokio::test]
    async fn test_register_then_resolve() {
        let mut registry = registry();
        let target = Address::from_raw(9);

        let result = registry
            .handle_action(
                RegistryAction::Register {
                    key: "treasury".into(),
                    address: target,
                },
                &(),
            )
            .await;
        assert_eq!(result, Ok(RegistryActionResult::Registered));

        let result = registry
            .handle_action(RegistryAction::Resolve("treasury".into()), &())
            .await;
        assert_eq!(result, Ok(RegistryActionResult::Resolved(target)));
    }

    #[tokio::test]
    async fn test_keys_are_unique() {
        let mut registry = registry();
        let register = |address| RegistryAction::Register { key: "dao".into(), address };

        registry.handle_action(register(Address::from_raw(2)), &()).await.unwrap();
        let err = registry
            .handle_action(register(Address::from_raw(3)), &())
            .await
            .unwrap_err();
        assert_eq!(err, RegistryError::NameTaken("dao".into()));
        assert_eq!(registry.entries.get("dao"), Some(&Address::from_raw(2)));
    }

    #[tokio::test]
    async fn test_rejects_empty_key_and_null_address() {
        let mut registry = registry();
        let empty_key = RegistryAction::Register {
            key: String::new(),
            address: Address::from_raw(2),
        };
        let null = RegistryAction::Register { key: "dao".into(), address: Address::NULL };

        assert!(matches!(
            registry.handle_action(empty_key, &()).await,
            Err(RegistryError::InvalidEntry(_))
        ));
        assert!(matches!(
            registry.handle_action(null, &()).await,
            Err(RegistryError::InvalidEntry(_))
        ));
        assert!(registry.entries.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_unknown_key() {
        let mut registry = registry();
        let err = registry
            .handle_action(RegistryAction::Resolve("ghost".into()), &())
            .await
            .unwrap_err();
        assert_eq!(err, RegistryError::NameNotFound("ghost".into()));
    }
}
