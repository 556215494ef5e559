use std::path::Path;

use pretty_assertions::assert_eq;
use test_log::test;

use super::*;

fn parse(text: &str) -> MissionData {
    parse_mission_text(Path::new("test.mis"), text)
}

#[test]
fn baseline_season_date_is_not_custom() {
    let mission = parse("[SEASON]\nYear 1940\nMonth 7\nDay 10\n");
    assert_eq!(mission.date, Some(MissionDate::new("1940", "7", "10")));
    assert!(!mission.date_is_custom);
}

#[test]
fn non_baseline_season_date_is_custom() {
    let mission = parse("[SEASON]\nYear 1941\nMonth 6\nDay 22\n");
    assert_eq!(mission.date, Some(MissionDate::new("1941", "6", "22")));
    assert!(mission.date_is_custom);
}

#[test]
fn truncated_season_leaves_date_absent() {
    let mission = parse("[SEASON]\nYear 1940\nMonth 7\n");
    assert_eq!(mission.date, None);
    assert!(!mission.date_is_custom);
}

#[test]
fn season_values_are_cut_at_fixed_offsets() {
    // Offsets 5/6/4 assume the exact "Year " / "Month " / "Day " prefixes;
    // shorter lines degrade to empty components.
    let mission = parse("[SEASON]\nYear\nMonth 12\nDay 3\n");
    assert_eq!(mission.date, Some(MissionDate::new("", "12", "3")));
    assert!(mission.date_is_custom);
}

#[test]
fn main_section_yields_map_name() {
    let mission = parse("[MAIN]\n  MAP Norway/load.ini\n");
    assert_eq!(mission.map_name.as_deref(), Some("Norway/load.ini"));
}

#[test]
fn main_without_map_directive_leaves_map_absent() {
    let mission = parse("[MAIN]\n  TIME 11.75\n");
    assert_eq!(mission.map_name, None);
}

#[test]
fn main_followed_by_header_does_not_swallow_it() {
    let mission = parse("[MAIN]\n[SEASON]\nYear 1940\nMonth 7\nDay 10\n");
    assert_eq!(mission.map_name, None);
    assert!(mission.date.is_some(), "the [SEASON] header must survive [MAIN] lookahead");
}

#[test]
fn player_line_takes_second_token_first_occurrence_wins() {
    let mission = parse("  Player RAF_Sqn1\n  player LW_Sqn2\n");
    assert_eq!(mission.player_squadron, "RAF_Sqn1");
}

#[test]
fn player_line_inside_unknown_section_is_still_seen() {
    let mission = parse("[GlobalWind_0]\n  Player RAF_Sqn1\n");
    assert_eq!(mission.player_squadron, "RAF_Sqn1");
}

#[test]
fn wing_section_produces_aircraft_entry() {
    let text = "\
[WING]
  RAF_Sqn1
[RAF_Sqn1]
  class air.Spitfire
  skin \"camo.bmp\"
  weapons default
";
    let mission = parse(text);
    assert_eq!(mission.wing_sections, vec!["RAF_Sqn1"]);
    assert_eq!(mission.aircraft.len(), 1);

    let entry = &mission.aircraft[0];
    assert_eq!(entry.aircraft_code, "Spitfire");
    assert_eq!(entry.weapon_code, "default");
    // skin values keep their original spelling, quotes included
    assert!(entry.skins.contains("\"camo.bmp\""));
}

#[test]
fn wing_names_are_deduplicated_in_first_seen_order() {
    let mission = parse("[WING]\n  B_Sqn\n  A_Sqn\n  B_Sqn\n");
    assert_eq!(mission.wing_sections, vec!["B_Sqn", "A_Sqn"]);
}

#[test]
fn class_without_weapons_yields_no_entry() {
    let text = "\
[WING]
  RAF_Sqn1
[RAF_Sqn1]
  class air.Spitfire
  Fuel 100
";
    let mission = parse(text);
    assert!(mission.aircraft.is_empty(), "class with no weapons line must be dropped");
}

#[test]
fn multiple_weapons_lines_share_one_class_and_skin_block() {
    let text = "\
[WING]
  RAF_Sqn1
[RAF_Sqn1]
  class air.Spitfire
  Skin0 camo.bmp
  weapons default
  weapons none
";
    let mission = parse(text);
    assert_eq!(mission.aircraft.len(), 2, "each weapons line commits an entry");
    assert_eq!(mission.aircraft[0].weapon_code, "default");
    assert_eq!(mission.aircraft[1].weapon_code, "none");
    assert_eq!(mission.aircraft[0].skins, mission.aircraft[1].skins);
    assert!(mission.aircraft[0].skins.contains("camo.bmp"));
}

#[test]
fn latest_class_before_weapons_wins() {
    let text = "\
[WING]
  RAF_Sqn1
[RAF_Sqn1]
  class air.Hurricane
  class air.Spitfire
  weapons default
";
    let mission = parse(text);
    assert_eq!(mission.aircraft.len(), 1);
    assert_eq!(mission.aircraft[0].aircraft_code, "Spitfire");
}

#[test]
fn class_value_without_dot_takes_first_token() {
    let text = "\
[WING]
  RAF_Sqn1
[RAF_Sqn1]
  class Gladiator 2
  weapons default
";
    let mission = parse(text);
    assert_eq!(mission.aircraft[0].aircraft_code, "Gladiator");
}

#[test]
fn chiefs_are_deduplicated_with_dotted_prefix_removed() {
    let text = "\
[CHIEFS]
  Chief01 vehicles.GermanyCarsColumnA Germany
  Chief02 vehicles.GermanyCarsColumnA Germany
  Chief03 USSR_CheckPoint USSR
";
    let mission = parse(text);
    assert_eq!(mission.chiefs.len(), 2);
    assert!(mission.chiefs.contains("GermanyCarsColumnA"));
    assert!(mission.chiefs.contains("USSR_CheckPoint"));
}

#[test]
fn shippack_lines_are_still_processed() {
    let mission = parse("[CHIEFS]\n  Chief01 ships.ShipPack$Tanker None\n");
    assert!(mission.chiefs.contains("ShipPack$Tanker"));
}

#[test]
fn stationary_planes_without_markings_are_flagged() {
    let text = "\
[NSTATIONARY]
  0_Static vehicles.planes.Bf109 1 null
  1_Static vehicles.planes.Ju88 1 null 0
  2_Static vehicles.planes.He111 1 null 1
  3_Static vehicles.stationary.Flak 1 null
";
    let mission = parse(text);
    assert_eq!(
        mission.stat_planes_without_markings,
        vec!["vehicles.planes.Bf109", "vehicles.planes.Ju88"]
    );
    assert_eq!(mission.stationaries.len(), 4);
}

#[test]
fn buildings_preserve_order_and_duplicates() {
    let text = "\
[BUILDINGS]
  0_bld House$Hangar1 1 100 200
  1_bld House$Hangar1 1 120 200
  2_bld Plate$Road1 1 140 200
";
    let mission = parse(text);
    assert_eq!(
        mission.buildings,
        vec!["House$Hangar1", "House$Hangar1", "Plate$Road1"]
    );
}

#[test]
fn parsing_is_total_on_arbitrary_input() {
    let mission = parse("[[\n]] nonsense [SEASON]\n[MAIN]");
    assert_eq!(mission.map_name, None);
    assert_eq!(mission.date, None);
    assert!(mission.aircraft.is_empty());
}

#[test]
fn read_mission_fails_only_for_missing_files() {
    assert!(read_mission(Path::new("/nonexistent/mission.mis")).is_err());
}
