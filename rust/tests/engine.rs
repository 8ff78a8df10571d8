//! End-to-end scenarios over the whole engine: catalog in, exports out.

use std::io::Write;

use crate::export::{grid_events, ics_entries, jobfeed_rows, to_ics};
use crate::json::JSON;
use crate::scheduling::{
    materialize, materialize_year, nd, Category, CatalogStore, DateRoll, EventCatalog,
    EventDefinition, ScheduleCal,
};

fn fixture_cal() -> ScheduleCal {
    ScheduleCal::try_new("lux,bel|usa").unwrap()
}

#[test]
fn full_year_record_counts() {
    let events = materialize_year(&EventCatalog::builtin(), 2025, &fixture_cal());

    let process = events
        .iter()
        .filter(|e| e.category == Category::Process)
        .count();
    let holidays = events
        .iter()
        .filter(|e| e.category == Category::Holiday)
        .count();
    assert_eq!(process, 14 * 12);
    // 2025 reference tables: 11 lux + 12 bel + 11 usa holidays
    assert_eq!(holidays, 34);
}

#[test]
fn resolved_dates_respect_exclusions() {
    let cal = ScheduleCal::try_new("lux,bel").unwrap();
    for year in [2025, 2026] {
        for month in 1..=12 {
            for offset in [1, 3, 5, 9, 14, 20] {
                let date = cal.nth_working_day(year, month, offset);
                assert!(date >= nd(year, month, 1));
                assert!(cal.is_weekday(&date));
                assert!(!cal.is_holiday(&date));
                assert_eq!(cal.working_days_between(&nd(year, month, 1), &date), offset);
            }
        }
    }
}

#[test]
fn holiday_shifts_resolution_by_one_working_day() {
    // Whit Monday 2025 (9th June) is the would-be 6th working day of June for
    // a bare weekend calendar; the logic calendars push WD6 to the 10th.
    let plain = ScheduleCal::try_new("usa").unwrap();
    let logic = ScheduleCal::try_new("lux,bel").unwrap();
    assert_eq!(plain.nth_working_day(2025, 6, 6), nd(2025, 6, 9));
    assert_eq!(logic.nth_working_day(2025, 6, 6), nd(2025, 6, 10));
}

#[test]
fn display_only_jurisdictions_never_move_dates() {
    let catalog = EventCatalog::builtin();
    let with_display = materialize_year(&catalog, 2026, &fixture_cal());
    let without = materialize_year(
        &catalog,
        2026,
        &ScheduleCal::try_new("lux,bel").unwrap(),
    );

    let dates = |events: &[crate::scheduling::MaterializedEvent]| -> Vec<_> {
        events
            .iter()
            .filter(|e| e.category == Category::Process)
            .map(|e| e.date)
            .collect()
    };
    assert_eq!(dates(&with_display), dates(&without));
}

#[test]
fn materialization_and_exports_are_deterministic() {
    let catalog = EventCatalog::builtin();
    let a = materialize_year(&catalog, 2026, &fixture_cal());
    let b = materialize_year(&catalog, 2026, &fixture_cal());
    assert_eq!(a, b);
    assert_eq!(
        grid_events(&a).to_json().unwrap(),
        grid_events(&b).to_json().unwrap()
    );
    assert_eq!(to_ics(&ics_entries(&a)), to_ics(&ics_entries(&b)));
}

#[test]
fn uploaded_catalog_replaces_builtin_wholesale() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "offset,name,scripts\n9,ML,refresh_ml;publish_ml\n4,\n12,Debrief,\n"
    )
    .unwrap();

    let load = EventCatalog::load_csv(std::fs::File::open(file.path()).unwrap()).unwrap();
    assert_eq!(load.catalog.len(), 2);
    assert_eq!(load.skipped.len(), 1);

    let store = CatalogStore::default();
    store.reload(load.catalog);
    let active = store.snapshot();
    assert_eq!(active.len(), 2);
    assert!(active.entries().iter().all(|d| d.name != "Alignment 1"));
}

#[test]
fn jobfeed_expands_scripts_across_twelve_months() {
    let catalog = EventCatalog::new(vec![EventDefinition {
        offset: 9,
        name: "ML".to_string(),
        scripts: vec!["refresh_ml".to_string(), "publish_ml".to_string()],
    }]);
    let rows = jobfeed_rows(&materialize_year(&catalog, 2025, &fixture_cal()));
    assert_eq!(rows.len(), 24);
    assert!(rows.iter().all(|r| r.logic == "WD9"));
}

#[test]
fn concurrent_events_share_their_resolved_date() {
    let catalog = EventCatalog::new(vec![
        EventDefinition::new(9, "ML"),
        EventDefinition::new(9, "SBU pre-read"),
    ]);
    let events = materialize(&catalog, 2025, &[4], &fixture_cal());
    let process: Vec<_> = events
        .iter()
        .filter(|e| e.category == Category::Process)
        .collect();
    assert_eq!(process.len(), 2);
    assert_eq!(process[0].date, process[1].date);
    assert_eq!(process[0].name, "ML");
}
