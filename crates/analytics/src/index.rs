use core_types::{Product, Snapshot, Warehouse};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Borrowed id→record lookups for one snapshot.
///
/// Built once per batch so that every per-line join is a hash lookup instead of
/// a scan over the product or warehouse list.
#[derive(Debug, Clone, Default)]
pub struct RecordIndex<'a> {
    products: HashMap<&'a str, &'a Product>,
    warehouses: HashMap<&'a str, &'a Warehouse>,
}

impl<'a> RecordIndex<'a> {
    /// Indexes the given collections. On duplicate ids the first record wins.
    pub fn build(products: &'a [Product], warehouses: &'a [Warehouse]) -> Self {
        let mut index = Self {
            products: HashMap::with_capacity(products.len()),
            warehouses: HashMap::with_capacity(warehouses.len()),
        };

        for product in products {
            match index.products.entry(product.id.as_str()) {
                Entry::Vacant(slot) => {
                    slot.insert(product);
                }
                Entry::Occupied(_) => {
                    tracing::debug!(product_id = %product.id, "Duplicate product id ignored.");
                }
            }
        }

        for warehouse in warehouses {
            match index.warehouses.entry(warehouse.id.as_str()) {
                Entry::Vacant(slot) => {
                    slot.insert(warehouse);
                }
                Entry::Occupied(_) => {
                    tracing::debug!(
                        warehouse_id = %warehouse.id,
                        "Duplicate warehouse id ignored."
                    );
                }
            }
        }

        index
    }

    pub fn from_snapshot(snapshot: &'a Snapshot) -> Self {
        Self::build(&snapshot.products, &snapshot.warehouses)
    }

    pub fn product(&self, id: &str) -> Option<&'a Product> {
        self.products.get(id).copied()
    }

    pub fn warehouse(&self, id: &str) -> Option<&'a Warehouse> {
        self.warehouses.get(id).copied()
    }
}
