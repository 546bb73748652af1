//! # Filing Flow Scenarios
//!
//! Walks the registry through realistic filing sequences and checks every
//! public view agrees at each step.

#[cfg(test)]
use pr_01_filing_registry::{FilingRegistryApi, FilingRegistryService, RegistryError};

#[cfg(test)]
use shared_types::InventorId;

#[cfg(test)]
const OFFICE: InventorId = InventorId([0xee; 32]);

#[cfg(test)]
fn make_registry() -> FilingRegistryService {
    crate::init_tracing();
    FilingRegistryService::new(OFFICE)
}

#[cfg(test)]
fn named_digest(name: &str) -> [u8; 32] {
    let mut d = [0u8; 32];
    let bytes = name.as_bytes();
    d[..bytes.len().min(32)].copy_from_slice(&bytes[..bytes.len().min(32)]);
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_dispute_resolves_to_first_filer() {
        let registry = make_registry();
        let alice = InventorId([0x0a; 32]);
        let bob = InventorId([0x0b; 32]);
        let d1 = named_digest("solar-panel-v1");

        // Alice files first at (t=1000, block=50).
        let receipt = registry
            .file(&d1, "Solar panel improvement", alice, 1_000, 50)
            .unwrap();
        assert_eq!(receipt.filing_id, 1);
        assert_eq!(receipt.record.filing_date, 1_000);
        assert_eq!(receipt.record.priority_block, 50);

        // Bob tries the identical digest later and loses.
        assert_eq!(
            registry.file(&d1, "duplicate", bob, 2_000, 60),
            Err(RegistryError::AlreadyFiled { digest: d1 })
        );

        // The archive still answers with Alice's untouched claim.
        let record = registry.lookup(&d1).unwrap();
        assert_eq!(record.inventor, alice);
        assert_eq!(record.filing_date, 1_000);
        assert_eq!(record.priority_block, 50);
        assert_eq!(record.summary, "Solar panel improvement");

        assert!(registry.is_inventor(&d1, alice));
        assert!(!registry.is_inventor(&d1, bob));
    }

    #[test]
    fn portfolio_grows_with_dense_filing_ids() {
        let registry = make_registry();
        let alice = InventorId([0x0a; 32]);

        let inventions = [
            "solar-panel-v1",
            "solar-panel-v2",
            "wind-turbine-blade",
            "battery-chemistry",
        ];
        for (i, name) in inventions.iter().enumerate() {
            let receipt = registry
                .file(&named_digest(name), name, alice, 1_000 + i as u64, 50 + i as u64)
                .unwrap();
            assert_eq!(receipt.filing_id, i as u64 + 1);
        }

        assert_eq!(registry.inventor_filing_count(alice), 4);
        assert_eq!(registry.total_inventions(), 4);

        // Enumeration by id matches the order of filing.
        for (i, name) in inventions.iter().enumerate() {
            let record = registry.lookup_by_inventor(alice, i as u64 + 1).unwrap();
            assert_eq!(record.digest, named_digest(name));
        }
        assert_eq!(
            registry.inventor_filings(alice),
            inventions.map(named_digest).to_vec()
        );
    }

    #[test]
    fn batch_lookup_mirrors_point_lookups() {
        let registry = make_registry();
        let carol = InventorId([0x0c; 32]);
        let filed = named_digest("gearbox");
        let unfiled = named_digest("never-filed");
        registry.file(&filed, "Gearbox", carol, 1, 1).unwrap();

        let batch = registry
            .batch_lookup(&[&filed, &unfiled, &filed])
            .unwrap();

        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0], registry.lookup(&filed));
        assert_eq!(batch[1], registry.lookup(&unfiled));
        assert_eq!(batch[2], registry.lookup(&filed));
    }

    #[test]
    fn office_gate_holds_while_public_surface_stays_open() {
        let registry = make_registry();
        let dave = InventorId([0x0d; 32]);
        let d = named_digest("hydraulic-press");
        registry.file(&d, "Hydraulic press", dave, 5, 5).unwrap();

        // Public lookup needs no permission.
        assert!(registry.lookup(&d).is_ok());

        // Administrative read is office-only, even for the record's inventor.
        assert_eq!(
            registry.office_get_invention_details(&d, dave),
            Err(RegistryError::PermissionDenied)
        );
        let record = registry.office_get_invention_details(&d, OFFICE).unwrap();
        assert_eq!(record, registry.lookup(&d).unwrap());

        let stats = registry.office_stats();
        assert_eq!(stats.total_inventions, 1);
        assert_eq!(stats.office, OFFICE);
    }
}
