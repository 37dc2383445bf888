//! Domain ports for the hexagonal boundary.

mod crud_repository;
mod delivery_notifier;
mod storage_probe;

pub use crud_repository::{
    BranchRepository, CrudRepository, DeliveryRepository, DeliveryStatusRepository,
    HeadquartersRepository, OrderDetailDeliveryRepository, OrderDetailRepository,
    OrderRepository, ProductRepository, SupplierRepository,
};
#[cfg(test)]
pub use delivery_notifier::MockDeliveryNotifier;
pub use delivery_notifier::{DeliveryNotifier, DeliveryNotifierError, FixtureDeliveryNotifier};
#[cfg(test)]
pub use storage_probe::MockStorageProbe;
pub use storage_probe::StorageProbe;
