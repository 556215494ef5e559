use std::fs;
use std::path::Path;

use anyhow::Result;

use campaign_analyzer::{AnalyzerOptions, AppSettings, run};

fn init() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

const MISSION_ONE: &str = "\
[MAIN]
  MAP Norway/load.ini
  TIME 12.0
  player GB_FC_Sqn00
[SEASON]
  Year 1941
  Month 6
  Day 22
[Wing]
  GB_FC_Sqn00
  DE_JG2700
[GB_FC_Sqn00]
  Planes 2
  Skill 1
  Class air.SPITFIRE_MKI
  Fuel 100
  Skin0 camo.bmp
  Skin1 winter.bmp
  weapons default
[DE_JG2700]
  Planes 1
  Skill 2
  Class air.BF_109E4
  weapons default
[CHIEFS]
  0_Chief Armor.GermanyCarsColumnA 2
  1_Chief Vehicles.GhostColumn 1
[NStationary]
  0_Static vehicles.planes.Bf109E_static 2 24000.0 28000.0 360.00 0.0 null 0
  1_Static vehicles.stationary.Flak38 1 100.0 200.0 0.0 0.0
[Buildings]
  0_bld House$Hangar1 1 24000.0 28000.0 600.0
  1_bld House$Ruin 1 25000.0 28000.0 600.0
";

const MISSION_TWO: &str = "\
[MAIN]
  MAP Norway/load.ini
[SEASON]
  Year 1940
  Month 7
  Day 10
";

/// Lay out a minimal IL-2 installation, skin tree, maps root and a campaign
/// with two missions under the given root.
fn build_installation(root: &Path) -> Result<AppSettings> {
    let std_path = root.join("STD");
    let objects = std_path.join("com").join("maddox").join("il2").join("objects");
    fs::create_dir_all(&objects)?;
    fs::write(objects.join("air.ini"), "[Air]\nSpitfireMkIa air.SPITFIRE_MKI 2 g01 SUMMER\n")?;
    fs::write(
        objects.join("chief.ini"),
        "GermanyCarsColumnA Trucks.GermanyCar 8\n[Ships.Tramp]\nNotAChief 1\n",
    )?;
    fs::write(
        objects.join("stationary.ini"),
        "Bf109E vehicles.planes.Bf109E_static 1\nFlak38 vehicles.stationary.Flak38 1\n",
    )?;
    fs::write(
        objects.join("static.ini"),
        "[buildings.House$Hangar1]\nTitle Hangar1\nMeshLive 3do/Hangar1/live.sim\n",
    )?;

    let i18n = std_path.join("i18n");
    fs::create_dir_all(&i18n)?;
    fs::write(i18n.join("weapons.properties"), "SpitfireMkIa.default Default\n")?;
    fs::write(i18n.join("regInfo.properties"), "GB_FC_Sqn No.64 Sqn RAF\n")?;

    let skin_path = root.join("PaintSchemes").join("Skins");
    let spitfire_skins = skin_path.join("SpitfireMkIa");
    fs::create_dir_all(&spitfire_skins)?;
    fs::write(spitfire_skins.join("camo.bmp"), b"bmp")?;

    let maps_path = root.join("Maps_root");
    fs::create_dir_all(maps_path.join("Maps"))?;
    fs::write(
        maps_path.join("Maps").join("all.ini"),
        "[all]\nNorway Norway/load.ini\n",
    )?;

    let campaign_path = root.join("Campaign");
    fs::create_dir_all(&campaign_path)?;
    fs::write(campaign_path.join("campaign.ini"), "[Mission]\n  mission01.mis\n  mission02.mis\n")?;
    fs::write(campaign_path.join("mission01.mis"), MISSION_ONE)?;
    fs::write(campaign_path.join("mission02.mis"), MISSION_TWO)?;

    Ok(AppSettings {
        std_path,
        skin_path,
        campaign_path,
        output_directory: root.join("out"),
        maps_path: Some(maps_path),
        auto_correct_static_markings: true,
        auto_replace_stationary_objects: true,
        make_non_player_ai_only: true,
        full_report: true,
    })
}

fn analyzer_options(root: &Path) -> Result<AnalyzerOptions> {
    let conversions_path = root.join("Common Conversions.txt");
    fs::write(&conversions_path, "Vehicles.GhostColumn, Armor.GermanyCarsColumnA\n")?;

    let base_static_ini = root.join("base_static.ini");
    fs::write(
        &base_static_ini,
        "[buildings.House$Ruin]\nTitle Ruin\nMeshLive 3do/Ruin/live.sim\n",
    )?;

    Ok(AnalyzerOptions {
        json_report: true,
        conversions_path,
        base_static_ini: Some(base_static_ini),
    })
}

#[test]
fn full_campaign_run_reports_and_fixes_missions() -> Result<()> {
    init();
    let dir = tempfile::tempdir()?;
    let settings = build_installation(dir.path())?;
    let options = analyzer_options(dir.path())?;

    run(&settings, &options)?;

    let report = fs::read_to_string(settings.output_report_path())?;

    // Mission one: custom date, known map, and one finding per category.
    assert!(report.contains("Reading mission mission01.mis\n"), "report was:\n{report}");
    assert!(report.contains("Mission Map = Norway/load.ini\n"));
    assert!(!report.contains("###Map"), "the map is listed in all.ini");
    assert!(report.contains("Mission Date: 1941-6-22\n"));
    assert!(report.contains("Aircraft used:\n"), "full report lists aircraft");
    assert!(report.contains("\tSPITFIRE_MKI\n"));
    assert!(report.contains("### Aircrafts - Not found:\n\tBF_109E4\n"));
    assert!(report.contains("### Skins - Missing:\n\twinter.bmp for SPITFIRE_MKI\n"));
    assert!(report.contains("### Chiefs - Not found:\n\tGhostColumn\n"));
    assert!(report.contains("### Static objects - Not found:\n\tHouse$Ruin\n"));
    assert!(
        report.contains("### Stationary planes without markings:\n\tvehicles.planes.Bf109E_static\n")
    );
    assert!(report.contains("### Wings - Not configured\n\tWing: DE_JG27\n"));
    assert!(!report.contains("Wing: GB_FC_Sqn\n"), "configured wings are not flagged");

    // Mission two: baseline date, nothing to flag.
    assert!(report.contains("Reading mission mission02.mis\n"));
    assert!(report.contains("###Mission Date not set\n"));

    Ok(())
}

#[test]
fn auto_fixes_are_applied_once_and_never_reapplied() -> Result<()> {
    init();
    let dir = tempfile::tempdir()?;
    let settings = build_installation(dir.path())?;
    let options = analyzer_options(dir.path())?;

    run(&settings, &options)?;

    let fixed_path = settings.output_directory.join("mission01.mis");
    let fixed = fs::read_to_string(&fixed_path)?;

    // AI-only enforcement targets the non-player wing only.
    assert!(
        fixed.contains("[DE_JG2700]\n  Planes 1\n  Skill 2\n  OnlyAI 1\n"),
        "fixed mission was:\n{fixed}"
    );
    assert!(!fixed.contains("[GB_FC_Sqn00]\n  Planes 2\n  Skill 1\n  OnlyAI 1\n"));

    // Object substitution rewrote the unknown chief in place.
    assert!(fixed.contains("  1_Chief Armor.GermanyCarsColumnA 1\n"));
    assert!(!fixed.contains("GhostColumn"));

    // The static plane got its visibility marker repaired.
    assert!(fixed.contains("vehicles.planes.Bf109E_static 2 24000.0 28000.0 360.00 0.0 null 1\n"));

    // Existing outputs are left alone on a second run.
    fs::write(&fixed_path, "sentinel")?;
    run(&settings, &options)?;
    assert_eq!(fs::read_to_string(&fixed_path)?, "sentinel");

    Ok(())
}

#[test]
fn json_report_and_static_ini_export_are_written() -> Result<()> {
    init();
    let dir = tempfile::tempdir()?;
    let settings = build_installation(dir.path())?;
    let options = analyzer_options(dir.path())?;

    run(&settings, &options)?;

    let json_path = settings.output_directory.join("CampaignAnalyzerOutput.json");
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path)?)?;
    let missions = json.as_array().expect("top level is a mission array");
    assert_eq!(missions.len(), 2);
    assert_eq!(missions[0]["mission_name"], "mission01.mis");
    assert_eq!(missions[0]["date_is_custom"], true);
    assert!(
        missions[0]["diagnostics"]
            .as_array()
            .expect("diagnostics array")
            .iter()
            .any(|d| d["category"] == "missing-aircraft" && d["subject"] == "BF_109E4"),
        "diagnostics were:\n{}",
        missions[0]["diagnostics"]
    );
    assert_eq!(missions[1]["date_is_custom"], false);

    // Missing buildings are exported as ready-to-append static.ini sections.
    let export = fs::read_to_string(settings.output_directory.join("_add_to_static.ini"))?;
    assert!(export.contains("[buildings.House$Ruin]\nTitle Ruin\n"));
    assert!(!export.contains("Hangar1"));

    Ok(())
}

#[test]
fn missing_installation_paths_fail_the_run() -> Result<()> {
    init();
    let dir = tempfile::tempdir()?;
    let settings = AppSettings {
        std_path: dir.path().join("no_such_std"),
        skin_path: dir.path().join("no_such_skins"),
        campaign_path: dir.path().join("no_such_campaign"),
        output_directory: dir.path().join("out"),
        ..AppSettings::default()
    };

    let error = run(&settings, &AnalyzerOptions::default()).unwrap_err();
    let chain = format!("{error:#}");
    assert!(chain.contains("air.ini"), "error chain was: {chain}");
    Ok(())
}
