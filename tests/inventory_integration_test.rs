use anyhow::Result;
use marina_ledger::{
    load, save, BoatRecord, Inventory, LocalStorage, MarinaConfig, MarinaError, PlacementPayload,
    PlacementType,
};
use std::fs;
use tempfile::TempDir;

const SAMPLE_DATA: &str = "\
Big Brother,20.00,slip,27,1200.00
Pirate,23.00,trailor,ABC123,1000.00
Fantasy,33.00,slip,3,0.00
Gallant,25.00,land,C,1.25
Moon Glow,28.00,storage,1,75.00
";

/// Scenario: capacity 2, the third add is rejected.
#[test]
fn test_add_rejects_when_full() {
    let mut inventory = Inventory::new(2);
    inventory.add("Alpha,20.0,slip,5,100.00").unwrap();
    inventory.add("Beta,30.0,land,B,50.00").unwrap();

    let before = inventory.records().to_vec();
    let result = inventory.add("Gamma,10.0,storage,1,0.00");

    assert!(matches!(result, Err(MarinaError::Full { capacity: 2 })));
    assert_eq!(inventory.records(), before.as_slice());
}

/// Scenario: overpayment is rejected and reports the balance.
#[test]
fn test_overpayment_then_partial_payment() {
    let mut inventory = Inventory::default();
    inventory.add("Alpha,20.0,slip,5,100.00").unwrap();

    match inventory.accept_payment("Alpha", 150.0) {
        Err(MarinaError::ExceedsOwed { owed }) => assert_eq!(owed, 100.0),
        other => panic!("expected ExceedsOwed, got {:?}", other),
    }
    assert_eq!(inventory.find("Alpha").unwrap().amount_owed(), 100.0);

    inventory.accept_payment("Alpha", 40.0).unwrap();
    assert_eq!(inventory.find("Alpha").unwrap().amount_owed(), 60.0);
}

/// Scenario: a 30 ft land boat is billed 420.00 a month.
#[test]
fn test_monthly_charge_for_land_boat() {
    let mut inventory = Inventory::default();
    inventory.add("Beta,30.0,land,B,0.00").unwrap();

    inventory.apply_monthly_charges();
    assert_eq!(inventory.find("Beta").unwrap().amount_owed(), 420.0);
}

/// Scenario: removing an unknown boat changes nothing.
#[test]
fn test_remove_unknown_boat() {
    let mut inventory = Inventory::default();
    inventory.add("Alpha,20.0,slip,5,100.00").unwrap();

    assert!(matches!(
        inventory.remove("Nonexistent"),
        Err(MarinaError::NotFound { .. })
    ));
    assert_eq!(inventory.len(), 1);
}

/// Scenario: a single slip record saves as one exact line.
#[test]
fn test_save_writes_exact_line() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("BoatData.csv");

    let mut inventory = Inventory::default();
    inventory.add("Dock,40.00,slip,7,123.45")?;
    save(&LocalStorage::default(), &path, &inventory)?;

    assert_eq!(fs::read_to_string(&path)?, "Dock,40.00,slip,7,123.45\n");
    Ok(())
}

#[test]
fn test_full_session_against_data_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("BoatData.csv");
    fs::write(&path, SAMPLE_DATA)?;

    let storage = LocalStorage::default();
    let (mut inventory, report) = load(&storage, &path, Inventory::default())?;
    assert_eq!(report.loaded, 5);
    assert_eq!(report.skipped, 0);
    assert!(!report.full);

    let pirate = inventory.find("pirate").unwrap();
    assert_eq!(pirate.placement(), PlacementType::Trailor);
    assert_eq!(
        *pirate.payload(),
        PlacementPayload::Trailor {
            tag: "ABC123".to_string()
        }
    );

    let sorted: Vec<&str> = inventory
        .list_sorted_by_name()
        .iter()
        .map(|b| b.name())
        .collect();
    assert_eq!(
        sorted,
        vec!["Big Brother", "Fantasy", "Gallant", "Moon Glow", "Pirate"]
    );

    inventory.remove("Fantasy")?;
    inventory.accept_payment("Big Brother", 200.0)?;
    inventory.add("Zephyr,18.50,storage,12,0.00")?;
    save(&storage, &path, &inventory)?;

    let saved = fs::read_to_string(&path)?;
    assert_eq!(
        saved,
        "\
Big Brother,20.00,slip,27,1000.00
Pirate,23.00,trailor,ABC123,1000.00
Gallant,25.00,land,C,1.25
Moon Glow,28.00,storage,1,75.00
Zephyr,18.50,storage,12,0.00
"
    );

    let (reloaded, _) = load(&storage, &path, Inventory::default())?;
    assert_eq!(reloaded.records(), inventory.records());
    Ok(())
}

#[test]
fn test_load_respects_configured_capacity() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("BoatData.csv");
    fs::write(&path, SAMPLE_DATA)?;

    let config = MarinaConfig::from_toml_str("[inventory]\ncapacity = 3\n")?;
    let (inventory, report) = load(&LocalStorage::default(), &path, config.new_inventory())?;

    assert!(report.full);
    assert_eq!(report.loaded, 3);
    assert_eq!(inventory.len(), 3);
    assert!(inventory.find("Moon Glow").is_none());
    Ok(())
}

#[test]
fn test_load_skips_lines_without_a_name() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("BoatData.csv");
    fs::write(&path, "Alpha,20.00,slip,5,1.00\n,30.00,land,B,2.00\nBeta,ten,dock,?,x\n")?;

    let (inventory, report) = load(&LocalStorage::default(), &path, Inventory::default())?;
    assert_eq!(report.loaded, 2);
    assert_eq!(report.skipped, 1);

    let beta = inventory.find("Beta").unwrap();
    assert_eq!(beta.length(), 0.0);
    assert_eq!(beta.placement(), PlacementType::NoPlace);
    assert_eq!(beta.amount_owed(), 0.0);
    Ok(())
}

#[test]
fn test_load_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.csv");

    let result = load(&LocalStorage::default(), &path, Inventory::default());
    assert!(matches!(result, Err(MarinaError::IoError(_))));
}

#[test]
fn test_save_error_is_surfaced() -> Result<()> {
    let temp_dir = TempDir::new()?;
    // A plain file standing where the parent directory should be.
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "not a directory")?;

    let mut inventory = Inventory::default();
    inventory.add("Alpha,20.0,slip,5,100.00")?;

    let result = save(&LocalStorage::default(), &blocker.join("BoatData.csv"), &inventory);
    assert!(matches!(result, Err(MarinaError::IoError(_))));
    assert_eq!(fs::read_to_string(&blocker)?, "not a directory");
    Ok(())
}

#[test]
fn test_unstorable_values_never_reach_the_data_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("BoatData.csv");
    let storage = LocalStorage::default();

    assert!(BoatRecord::new("Sea\nBreeze", 20.0, PlacementPayload::Slip { number: 1 }, 5.0).is_err());

    let mut inventory = Inventory::default();
    assert!(matches!(
        inventory.add("Alpha,-20.0,slip,5,0.00"),
        Err(MarinaError::ParseError { .. })
    ));
    inventory.add("Sea Breeze,20.0,slip,1,5.00")?;
    inventory.insert(BoatRecord::new(
        "Tow",
        18.0,
        PlacementPayload::trailor("AB CD")?,
        0.0,
    )?)?;
    inventory.apply_monthly_charges();
    save(&storage, &path, &inventory)?;

    let (reloaded, report) = load(&storage, &path, Inventory::default())?;
    assert_eq!(report.loaded, 2);
    assert_eq!(reloaded.records(), inventory.records());
    assert!(reloaded.records().iter().all(|b| b.amount_owed() >= 0.0));
    Ok(())
}
