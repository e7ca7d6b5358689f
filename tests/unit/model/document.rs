use super::*;
use crate::foundation::core::Rect;

const DOC: &str = r##"
{
  "viewport": { "width": 400, "height": 800 },
  "theme": { "labels": { "next": "Next" } },
  "steps": [
    {
      "id": "search",
      "title": "Search",
      "description": "Find anything.",
      "image": "search.png",
      "target": { "x": 20, "y": 20, "width": 100, "height": 50 }
    },
    {
      "description": "Your profile lives here.",
      "target": { "x": 300, "y": 730, "width": 80, "height": 50 }
    }
  ]
}
"##;

#[test]
fn parses_flattened_step_content() {
    let doc = TourDocument::from_json_str(DOC).unwrap();
    doc.validate().unwrap();
    assert_eq!(doc.theme.labels.next, "Next");
    assert_eq!(doc.theme.labels.finish, "Done");

    let steps = doc.steps();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].content.id.as_deref(), Some("search"));
    assert!(steps[0].has_image());
    assert_eq!(steps[0].target, Rect::new(20.0, 20.0, 120.0, 70.0));
    assert!(steps[1].content.title.is_none());
    assert!(!steps[1].has_image());
}

#[test]
fn viewport_defaults_when_missing() {
    let doc = TourDocument::from_json_str(
        r#"{"steps":[{"description":"d","target":{"x":0,"y":0,"width":1,"height":1}}]}"#,
    )
    .unwrap();
    assert_eq!(doc.viewport_or_default(), Viewport::default());
}

#[test]
fn validate_reports_bad_step_index() {
    let doc = TourDocument::from_json_str(
        r#"{"steps":[{"description":"d","target":{"x":0,"y":0,"width":-1,"height":1}}]}"#,
    )
    .unwrap();
    let err = doc.validate().unwrap_err();
    assert!(err.to_string().contains("step 0"));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = TourDocument::from_json_str("{").unwrap_err();
    assert!(matches!(err, TourError::Serde(_)));
}

#[test]
fn parses_per_step_text_styles() {
    let doc = TourDocument::from_json_str(
        r##"{"steps":[{
            "title": "Hi",
            "title_style": { "font": { "size": 22, "weight": "bold" } },
            "description": "d",
            "description_style": { "color": "#ff3b30" },
            "target": {"x":0,"y":0,"width":1,"height":1}
        }]}"##,
    )
    .unwrap();
    let content = &doc.steps[0].content;
    assert_eq!(content.title_style.font.map(|f| f.size), Some(22.0));
    assert!(content.title_style.color.is_none());
    assert_eq!(
        content.description_style.color,
        Some(crate::foundation::color::Color::rgb(255, 59, 48))
    );

    // Unstyled steps serialize without style keys.
    let plain = StepContent::new("x");
    let json = serde_json::to_value(&plain).unwrap();
    assert!(json.get("title_style").is_none());
}
