use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::scene::compose::CompositionRenderer;

#[test]
fn field_mode_parses_and_prints() {
    assert_eq!("lines".parse::<FieldMode>().unwrap(), FieldMode::Lines);
    assert_eq!(" Emoji ".parse::<FieldMode>().unwrap(), FieldMode::Emoji);
    assert!("both".parse::<FieldMode>().is_err());
    assert_eq!(FieldMode::Lines.to_string(), "lines");
    assert_eq!(FieldMode::default(), FieldMode::Emoji);
}

#[test]
fn export_precondition_is_non_empty_primary() {
    let mut i = SceneInputs::default();
    assert!(!i.can_export());
    i.top = "caption only".to_string();
    assert!(!i.can_export());
    i.primary = "x".to_string();
    assert!(i.can_export());
}

#[test]
fn scene_json_roundtrips() {
    let r = CompositionRenderer::default();
    let inputs = SceneInputs {
        top: "Hi".to_string(),
        primary: "b<o>b".to_string(),
        bottom: "Bye".to_string(),
        mode: FieldMode::Emoji,
    };
    let scene = r.compose(&inputs, &mut StdRng::seed_from_u64(10));
    let json = scene.to_json().unwrap();
    assert!(json.contains("\"mode\": \"emoji\""));
    let back = Scene::from_json(&json).unwrap();
    assert_eq!(back, scene);
}

#[test]
fn bad_scene_json_is_a_serde_error() {
    assert!(matches!(
        Scene::from_json("{}"),
        Err(ScatterError::Serde(_))
    ));
}
