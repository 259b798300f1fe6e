//! tests/api/home.rs

use crate::helpers::setup;

#[tokio::test]
async fn home_serves_the_preference_form() {
    let test = setup().await;

    let response = test.get("/").await;

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()["Content-Type"],
        "text/html; charset=utf-8"
    );

    let html = response.text().await.expect("Failed to read body.");
    assert!(html.contains(r#"name="email""#));
    for allergen in ["peanuts", "shellfish", "gluten", "dairy", "soy"] {
        assert!(
            html.contains(&format!(r#"value="{}""#, allergen)),
            "The form is missing the {} checkbox.",
            allergen
        );
    }
}
