use std::path::PathBuf;

use assert_matches::assert_matches;
use learnset_data::{
    DataSource,
    DetailAtom,
    LearnMethod,
    LearnMethodKind,
    Learner,
    LocalDataSource,
    MoveLearners,
    MoveTable,
    ReportDataSource,
    StaticDataSource,
};
use pretty_assertions::assert_eq;

fn test_data_dir(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn local_data_source_fails_for_missing_directory() {
    assert_matches!(
        LocalDataSource::new(test_data_dir("missing")),
        Err(err) => {
            assert!(err.to_string().contains("does not exist"));
        }
    );
}

#[test]
fn local_data_source_fails_for_undefined_env_var() {
    assert_matches!(
        LocalDataSource::new_from_env("LEARNSET_DATA_TEST_UNDEFINED_DIR"),
        Err(err) => {
            assert_eq!(err.to_string(), "LEARNSET_DATA_TEST_UNDEFINED_DIR not defined");
        }
    );
}

#[tokio::test]
async fn local_data_source_reads_move_list() {
    let source = LocalDataSource::new(test_data_dir("json")).unwrap();
    assert_eq!(
        source.move_list().await.unwrap(),
        vec!["Tackle", "Thunderbolt", "Ember", "Surf"]
    );
}

#[tokio::test]
async fn local_data_source_reads_move_data_in_file_order() {
    let source = LocalDataSource::new(test_data_dir("json")).unwrap();
    let moves = source.move_data().await.unwrap();
    assert_eq!(
        moves.keys().collect::<Vec<_>>(),
        vec!["Tackle", "Thunderbolt", "Ember"]
    );
    assert_eq!(
        moves["Tackle"].level_up("Rattata"),
        Some([DetailAtom::Integer(1)].as_slice())
    );
    assert_eq!(
        moves["Thunderbolt"].get(LearnMethodKind::TeachableItem),
        &[Learner::new("Pikachu"), Learner::new("Rattata")]
    );
    assert_eq!(
        moves["Ember"].level_up("Charmander"),
        Some([DetailAtom::from("1"), DetailAtom::from("1")].as_slice())
    );
}

#[tokio::test]
async fn local_data_source_reads_names_only_move_data() {
    let source = LocalDataSource::new(test_data_dir("json"))
        .unwrap()
        .with_move_data_file(LocalDataSource::NAMES_ONLY_MOVE_DATA_FILE);
    let moves = source.move_data().await.unwrap();
    assert_eq!(
        moves["Thunderbolt"].flatten().collect::<Vec<_>>(),
        vec![
            ("Pikachu", LearnMethod::Unspecified),
            ("Rattata", LearnMethod::Unspecified),
        ]
    );
}

#[tokio::test]
async fn local_data_source_fails_for_missing_file() {
    let source = LocalDataSource::new(test_data_dir("json"))
        .unwrap()
        .with_move_data_file("missing.json");
    assert_matches!(source.move_data().await, Err(err) => {
        assert!(err.to_string().starts_with("failed to read"));
    });
}

#[tokio::test]
async fn report_data_source_reads_move_names_in_order() {
    let source = ReportDataSource::new(test_data_dir("reports")).unwrap();
    assert_eq!(
        source.move_list().await.unwrap(),
        vec!["Ember", "Surf", "Fire Blast"]
    );
}

#[tokio::test]
async fn report_data_source_parses_reports_and_skips_missing() {
    let source = ReportDataSource::new(test_data_dir("reports")).unwrap();
    let moves = source.move_data().await.unwrap();
    assert_eq!(moves.keys().collect::<Vec<_>>(), vec!["Ember", "Surf"]);
    assert_eq!(
        moves["Ember"].get(LearnMethodKind::LevelUp),
        &[
            Learner::with_details("Charmander", [1i64, 1]),
            Learner::with_details("Vulpix", [1i64, 1]),
        ]
    );
    assert_eq!(
        moves["Surf"].flatten().collect::<Vec<_>>(),
        vec![
            ("Lapras", LearnMethod::TeachableItem),
            ("Dewgong", LearnMethod::TeachableItem),
            ("Pikachu", LearnMethod::SpecialEvent),
        ]
    );
}

#[tokio::test]
async fn static_data_source_lists_moves_in_table_order() {
    let mut moves = MoveTable::default();
    moves.insert("Tackle".to_owned(), MoveLearners::names_only(["Rattata"]));
    moves.insert("Surf".to_owned(), MoveLearners::names_only(["Lapras"]));
    let source = StaticDataSource::from_move_table(moves.clone());
    assert_eq!(source.move_list().await.unwrap(), vec!["Tackle", "Surf"]);
    assert_eq!(source.move_data().await.unwrap(), moves);
}

#[tokio::test]
async fn report_data_source_fails_when_report_cannot_be_checked() {
    let source = ReportDataSource::new(test_data_dir("reports_invalid_key")).unwrap();
    assert_matches!(source.move_data().await, Err(err) => {
        assert!(err.to_string().starts_with("failed to check"), "{err:#}");
    });
}
