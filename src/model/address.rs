//! Addresses, component kinds, capabilities and typed handles.
//!
//! An [`Address`] is the only thing components know about each other. A [`Handle`] is an
//! address plus the capability the holder expects behind it; the type parameter stops a
//! registry handle from being passed where a fungible-unit handle is wanted, and the
//! runtime probe in [`Directory`](crate::clients::Directory) catches the rest.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Opaque identifier of a component instance (or of an external account).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address(u64);

impl Address {
    /// The null address. Never issued to a component.
    pub const NULL: Address = Address(0);

    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for Address {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ct_{}", self.0)
    }
}

/// The kinds of component the backend knows how to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Registry,
    FungibleUnit,
    RewardPool,
    GovernanceUnit,
}

impl ComponentKind {
    /// Operation sets a component of this kind answers to.
    pub const fn capabilities(self) -> &'static [Capability] {
        match self {
            ComponentKind::Registry => &[Capability::Naming],
            ComponentKind::FungibleUnit => &[Capability::Balances],
            ComponentKind::RewardPool => &[Capability::Distribution],
            ComponentKind::GovernanceUnit => &[Capability::Governs],
        }
    }

    pub fn supports(self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

impl Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentKind::Registry => "registry",
            ComponentKind::FungibleUnit => "fungible unit",
            ComponentKind::RewardPool => "reward pool",
            ComponentKind::GovernanceUnit => "governance unit",
        };
        f.write_str(name)
    }
}

/// A named operation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// `register` / `resolve`
    Naming,
    /// `balance_of` / `transfer` / `mint`
    Balances,
    /// `distribute` / `remaining`
    Distribution,
    /// Holds a governance configuration wired to three leaves.
    Governs,
}

impl Capability {
    /// The component kind that provides this capability.
    pub const fn provider(self) -> ComponentKind {
        match self {
            Capability::Naming => ComponentKind::Registry,
            Capability::Balances => ComponentKind::FungibleUnit,
            Capability::Distribution => ComponentKind::RewardPool,
            Capability::Governs => ComponentKind::GovernanceUnit,
        }
    }
}

impl Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::Naming => "naming",
            Capability::Balances => "balances",
            Capability::Distribution => "distribution",
            Capability::Governs => "governance",
        };
        f.write_str(name)
    }
}

/// Type-level capability markers for [`Handle`].
pub mod marker {
    use super::Capability;

    /// Implemented by the zero-sized capability markers.
    pub trait CapabilityMarker: Send + Sync + 'static {
        const CAPABILITY: Capability;
    }

    macro_rules! markers {
        ($($name:ident),* $(,)?) => {
            $(
                #[derive(Debug)]
                pub enum $name {}

                impl CapabilityMarker for $name {
                    const CAPABILITY: Capability = Capability::$name;
                }
            )*
        };
    }

    markers!(Naming, Balances, Distribution, Governs);
}

use marker::CapabilityMarker;

/// An address that is expected to support capability `C`.
///
/// Handles returned by the backend have been confirmed live. A handle built with
/// [`Handle::claim`] is only a claim and is checked again wherever it is consumed.
pub struct Handle<C: CapabilityMarker> {
    address: Address,
    _capability: PhantomData<fn() -> C>,
}

impl<C: CapabilityMarker> Handle<C> {
    pub const fn claim(address: Address) -> Self {
        Self {
            address,
            _capability: PhantomData,
        }
    }

    pub const fn address(&self) -> Address {
        self.address
    }

    pub const fn capability(&self) -> Capability {
        C::CAPABILITY
    }
}

impl<C: CapabilityMarker> Clone for Handle<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: CapabilityMarker> Copy for Handle<C> {}

impl<C: CapabilityMarker> PartialEq for Handle<C> {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl<C: CapabilityMarker> Eq for Handle<C> {}

impl<C: CapabilityMarker> Hash for Handle<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
    }
}

impl<C: CapabilityMarker> fmt::Debug for Handle<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle<{}>({})", C::CAPABILITY, self.address)
    }
}

impl<C: CapabilityMarker> Display for Handle<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.address, f)
    }
}

#[cfg(test)]
mod tests {
    use super::marker::{Balances, Naming};
    use super::*;

    #[test]
    fn test_null_address_is_distinct() {
        assert!(Address::NULL.is_null());
        assert!(!Address::from_raw(1).is_null());
        assert_eq!(Address::from_raw(42).to_string(), "ct_42");
    }

    #[test]
    fn test_each_kind_provides_its_own_capability() {
        for kind in [
            ComponentKind::Registry,
            ComponentKind::FungibleUnit,
            ComponentKind::RewardPool,
            ComponentKind::GovernanceUnit,
        ] {
            for capability in kind.capabilities() {
                assert_eq!(capability.provider(), kind);
            }
        }
        assert!(!ComponentKind::FungibleUnit.supports(Capability::Naming));
    }

    #[test]
    fn test_handles_carry_their_capability() {
        let token = Handle::<Balances>::claim(Address::from_raw(7));
        let registry = Handle::<Naming>::claim(Address::from_raw(7));
        assert_eq!(token.address(), registry.address());
        assert_eq!(token.capability(), Capability::Balances);
        assert_eq!(format!("{registry:?}"), "Handle<naming>(ct_7)");
    }
}
