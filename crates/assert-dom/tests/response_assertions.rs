//! End-to-end assertions against HTML and component-JSON responses
//!
//! Every test goes through the public entry points only.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_dom::prelude::*;
use assert_dom::init_test_tracing;

const PROFILE: &str = r#"
<div class="profile" id="user-42" data-user-id="42" data-is-active="true">
  <img class="avatar" src="/a.png">
  <span class="name">John Doe</span>
  <span class="email">john@example.com</span>
  <ul class="tags">
    <li class="tag">PHP</li>
    <li class="tag">Laravel</li>
  </ul>
</div>
"#;

const LOGIN_FORM: &str = r#"
<form class="login" action="/login" method="post">
  <input type="email" name="email" value="">
  <input type="password" name="password">
  <button type="submit" class="btn btn-primary">Sign in</button>
</form>
"#;

// ============================================================================
// Basic Scenarios
// ============================================================================

#[test]
fn test_card_has_heading() -> DomResult<()> {
    init_test_tracing();
    let response = HttpResponse::html(r#"<div class="card"><h1>Title</h1></div>"#);
    assert_one(&response, ".card", |dom| {
        dom.to_be_tag("div")?.to_have("h1")?;
        Ok(())
    })?;
    Ok(())
}

#[test]
fn test_missing_element_reports_selector() {
    init_test_tracing();
    let response = HttpResponse::html(r#"<div class="card">Content</div>"#);
    let message = assert_one(&response, ".nonexistent", |_| Ok(()))
        .unwrap_err()
        .to_string();
    assert!(message.contains(".nonexistent"));
    assert!(message.contains("not found"));
}

#[test]
fn test_assert_all_invokes_callback_per_match() -> DomResult<()> {
    init_test_tracing();
    let response =
        HttpResponse::html(r#"<ul><li class="item">A</li><li class="item">B</li></ul>"#);
    let mut calls = 0;
    assert_all(&response, ".item", |dom| {
        dom.to_be_tag("li")?;
        calls += 1;
        Ok(())
    })?;
    assert_eq!(calls, 2);
    Ok(())
}

#[test]
fn test_text_mismatch_message() {
    init_test_tracing();
    let response = HttpResponse::html(r#"<div class="card">Hello</div>"#);
    let message = assert_one(&response, ".card", |dom| {
        dom.text().to_equal("Goodbye")?;
        Ok(())
    })
    .unwrap_err()
    .to_string();
    assert!(message.contains(".card"));
    assert!(message.contains("text content"));
    assert!(message.contains("Hello"));
    assert!(message.contains("Goodbye"));
}

#[test]
fn test_boolean_attribute_is_present_and_empty() -> DomResult<()> {
    init_test_tracing();
    let response = HttpResponse::html(r#"<input value="" disabled class="field"/>"#);
    assert_one(&response, ".field", |dom| {
        dom.value()
            .to_be_empty()?
            .attribute("disabled")
            .to_exist()?
            .attribute("disabled")
            .to_equal("")?;
        Ok(())
    })?;
    Ok(())
}

// ============================================================================
// Response Sources
// ============================================================================

#[test]
fn test_component_update_payload() -> DomResult<()> {
    let response = HttpResponse::component(PROFILE);
    assert_one(&response, ".profile", |dom| {
        dom.to_be_tag("div")?
            .data("user-id")
            .to_equal("42")?
            .to_have_exactly(".tag", 2)?;
        Ok(())
    })?;
    Ok(())
}

#[test]
fn test_custom_embedded_pointer() -> DomResult<()> {
    let response = HttpResponse::json(&serde_json::json!({
        "snapshot": { "rendered": "<p class=\"note\">Saved</p>" }
    }))?;
    let asserter = DomAsserter::with_config(
        DomConfig::new().with_embedded_html_pointer("/snapshot/rendered"),
    );
    asserter.assert_one(&response, ".note", |dom| {
        dom.text().to_equal("Saved")?;
        Ok(())
    })?;
    Ok(())
}

#[test]
fn test_plain_strings_and_bytes() -> DomResult<()> {
    let bytes: Vec<u8> = b"<main><p>Body</p></main>".to_vec();
    bytes.assert_dom("main", |dom| {
        dom.to_have_count(1)?;
        Ok(())
    })?;
    assert_one("<main><p>Body</p></main>", "p", |dom| {
        dom.text().to_equal("Body")?;
        Ok(())
    })?;
    Ok(())
}

#[test]
fn test_entry_points_return_the_same_response() -> DomResult<()> {
    let response = HttpResponse::html(PROFILE);
    let first = response.assert_dom(".name", |dom| {
        dom.text().to_equal("John Doe")?;
        Ok(())
    })?;
    let second = first.assert_dom_all(".tag", |dom| {
        dom.to_be_tag("li")?;
        Ok(())
    })?;
    assert!(std::ptr::eq(first, &response));
    assert!(std::ptr::eq(second, &response));
    Ok(())
}

// ============================================================================
// Realistic Pages
// ============================================================================

#[test]
fn test_profile_page() -> DomResult<()> {
    let response = HttpResponse::html(PROFILE);
    response.assert_dom(".profile", |profile| {
        profile
            .attribute("id")
            .to_match(r"^user-\d+$")?
            .data("is-active")
            .to_equal("true")?
            .to_have(".avatar")?
            .to_have_satisfying(".name", |name| {
                name.text().to_equal("John Doe")?;
                Ok(())
            })?
            .to_have_satisfying(".email", |email| {
                email.text().to_contain("@")?.text().to_match(r"\.com$")?;
                Ok(())
            })?
            .not()
            .to_have(".error")?;
        Ok(())
    })?;
    Ok(())
}

#[test]
fn test_collect_texts_in_document_order() -> DomResult<()> {
    let response = HttpResponse::html(PROFILE);
    let mut texts = Vec::new();
    response.assert_dom_all(".tag", |tag| {
        texts.push(tag.element().text().collect::<String>());
        Ok(())
    })?;
    assert_eq!(texts, vec!["PHP", "Laravel"]);
    Ok(())
}

#[test]
fn test_login_form_with_attribute_selectors() -> DomResult<()> {
    let response = HttpResponse::html(LOGIN_FORM);
    assert_one(&response, "form.login", |form| {
        form.attribute("method")
            .to_equal("post")?
            .to_have_exactly("input", 2)?
            .to_have_satisfying(r#"input[type="password"]"#, |input| {
                input.attribute("name").to_equal("password")?.value().not().to_exist()?;
                Ok(())
            })?
            .to_have_satisfying("button", |button| {
                button.class().to_contain("btn-primary")?.text().to_equal("Sign in")?;
                Ok(())
            })?
            .not()
            .to_have(r#"input[type="checkbox"]"#)?;
        Ok(())
    })?;
    assert_one(&response, r#"input[name="email"]"#, |email| {
        email.value().to_exist()?.value().to_be_empty()?;
        Ok(())
    })?;
    Ok(())
}

#[test]
fn test_navigation_without_active_contact_link() -> DomResult<()> {
    let response = HttpResponse::html(
        r#"<nav><ul class="menu">
             <li class="item active">Home</li>
             <li class="item">About</li>
             <li class="item">Contact</li>
           </ul></nav>"#,
    );
    assert_one(&response, ".menu", |menu| {
        menu.to_have_count(3)?
            .not()
            .to_have_satisfying("li", |li| {
                li.class().to_contain("active")?.text().to_equal("Contact")?;
                Ok(())
            })?
            .not()
            .to_have_exactly("li", 2)?;
        Ok(())
    })?;
    Ok(())
}

// ============================================================================
// Failure Reporting
// ============================================================================

#[test]
fn test_assert_all_without_matches() {
    let response = HttpResponse::html(r#"<div class="card">Content</div>"#);
    let err = assert_all(&response, ".nonexistent", |_| Ok(())).unwrap_err();
    assert!(matches!(err, DomAssertError::NoMatches { .. }));
    assert!(err.to_string().contains(".nonexistent"));
}

#[test]
fn test_assert_all_stops_at_first_failure() {
    let response = HttpResponse::html(PROFILE);
    let mut visited = Vec::new();
    let err = response
        .assert_dom_all(".tag", |tag| {
            visited.push(tag.element().text().collect::<String>());
            tag.text().to_equal("Laravel")?;
            Ok(())
        })
        .unwrap_err();
    assert!(err.is_assertion_failure());
    assert_eq!(visited, vec!["PHP"]);
}

#[test]
fn test_nested_failure_names_nested_selector() {
    let response = HttpResponse::html(PROFILE);
    let message = assert_one(&response, ".profile", |profile| {
        profile.to_have_satisfying(".name", |name| {
            name.text().to_equal("Jane Doe")?;
            Ok(())
        })?;
        Ok(())
    })
    .unwrap_err()
    .to_string();
    assert!(message.contains(".profile .name"));
    assert!(message.contains("Jane Doe"));
}

#[test]
fn test_invalid_selector_is_not_an_assertion_failure() {
    let err = assert_one(PROFILE, "div[=x]", |_| Ok(())).unwrap_err();
    assert!(matches!(err, DomAssertError::InvalidSelector { .. }));
    assert!(!err.is_assertion_failure());
}

#[test]
fn test_invalid_pattern_surfaces() {
    let err = assert_one(PROFILE, ".name", |name| {
        name.text().to_match("[unclosed")?;
        Ok(())
    })
    .unwrap_err();
    assert!(matches!(err, DomAssertError::InvalidPattern { .. }));
}

// ============================================================================
// Null Values
// ============================================================================

/// Known quirk: a missing attribute makes the negated `to_contain` and
/// `to_match` fail even though an absent value contains nothing.
#[test]
fn test_negated_contain_and_match_on_missing_attribute_fail() {
    let response = HttpResponse::html(r#"<a class="link" href="/home">Home</a>"#);
    let contain = assert_one(&response, ".link", |link| {
        link.attribute("title").not().to_contain("x")?;
        Ok(())
    })
    .unwrap_err();
    assert!(contain.to_string().contains("null"));

    let matched = assert_one(&response, ".link", |link| {
        link.attribute("title").not().to_match("x")?;
        Ok(())
    })
    .unwrap_err();
    assert!(matched.to_string().contains("null"));
}

#[test]
fn test_missing_attribute_is_empty_but_not_existing() -> DomResult<()> {
    let response = HttpResponse::html(r#"<a class="link" href="/home">Home</a>"#);
    assert_one(&response, ".link", |link| {
        link.attribute("title")
            .to_be_empty()?
            .attribute("title")
            .not()
            .to_exist()?
            .attribute("title")
            .not()
            .to_equal("")?;
        Ok(())
    })?;
    Ok(())
}
