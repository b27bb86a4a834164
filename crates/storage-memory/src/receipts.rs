use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::debug;
use receipt_points_core::receipts::{Receipt, ReceiptRepositoryTrait};
use uuid::Uuid;

/// Receipt store backed by a single mutex-guarded map.
///
/// The lock is held for a single map operation only; identifiers are
/// generated before it is taken.
#[derive(Debug, Default)]
pub struct InMemoryReceiptRepository {
    receipts: Mutex<HashMap<String, Receipt>>,
}

impl InMemoryReceiptRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave a half-written entry,
    // so a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Receipt>> {
        self.receipts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ReceiptRepositoryTrait for InMemoryReceiptRepository {
    fn insert(&self, receipt: Receipt) -> String {
        let id = Uuid::new_v4().to_string();
        self.lock().insert(id.clone(), receipt);
        debug!("Inserted receipt {}", id);
        id
    }

    fn get(&self, receipt_id: &str) -> Option<Receipt> {
        self.lock().get(receipt_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_points_core::receipts::Item;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    fn create_receipt(retailer: &str) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![Item {
                short_description: "Dasani".to_string(),
                price: "1.40".to_string(),
            }],
            total: "1.40".to_string(),
        }
    }

    #[test]
    fn test_insert_then_get_returns_same_receipt() {
        let repository = InMemoryReceiptRepository::new();
        let receipt = create_receipt("Target");

        let id = repository.insert(receipt.clone());

        assert_eq!(repository.get(&id), Some(receipt));
    }

    #[test]
    fn test_get_unknown_id_returns_none() {
        let repository = InMemoryReceiptRepository::new();
        repository.insert(create_receipt("Target"));

        assert_eq!(repository.get("not-an-id"), None);
        assert_eq!(repository.get(""), None);
    }

    #[test]
    fn test_identical_receipts_get_distinct_ids() {
        let repository = InMemoryReceiptRepository::new();

        let first = repository.insert(create_receipt("Target"));
        let second = repository.insert(create_receipt("Target"));

        assert_ne!(first, second);
        assert_eq!(repository.len(), 2);
    }

    #[test]
    fn test_ids_are_uuids() {
        let repository = InMemoryReceiptRepository::new();

        let id = repository.insert(create_receipt("Target"));

        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.to_string(), id);
    }

    #[test]
    fn test_new_repository_is_empty() {
        let repository = InMemoryReceiptRepository::new();
        assert!(repository.is_empty());
        assert_eq!(repository.len(), 0);
    }

    #[test]
    fn test_concurrent_inserts_are_all_retrievable() {
        let repository = Arc::new(InMemoryReceiptRepository::new());

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let repository = Arc::clone(&repository);
                thread::spawn(move || {
                    (0..50)
                        .map(|n| {
                            let retailer = format!("Store {worker}-{n}");
                            let id = repository.insert(create_receipt(&retailer));
                            (id, retailer)
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let inserted: Vec<(String, String)> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();

        let ids: HashSet<&String> = inserted.iter().map(|(id, _)| id).collect();
        assert_eq!(ids.len(), 400);
        assert_eq!(repository.len(), 400);
        for (id, retailer) in &inserted {
            assert_eq!(repository.get(id).unwrap().retailer, *retailer);
        }
    }
}
