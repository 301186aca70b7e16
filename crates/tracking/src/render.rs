//! Template rendering seam and the built-in analytics.js renderer.

use serde_json::Value;

use crate::error::{TrackingError, TrackingResult};

/// Renders a named template with JSON parameters into text.
pub trait TemplateRenderer {
    fn render(&self, template_name: &str, parameters: &Value) -> TrackingResult<String>;
}

impl<R: TemplateRenderer + ?Sized> TemplateRenderer for &R {
    fn render(&self, template_name: &str, parameters: &Value) -> TrackingResult<String> {
        (**self).render(template_name, parameters)
    }
}

/// Built-in renderer producing Universal Analytics (analytics.js) code.
///
/// Templates are looked up by the last path segment of the template name, so
/// any prefix resolves to the same script. Supported: `checkout_complete`,
/// which expects a `calls` object of call name to payload array.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniversalScriptRenderer;

impl UniversalScriptRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_checkout_complete(&self, parameters: &Value) -> TrackingResult<String> {
        let calls = parameters
            .get("calls")
            .and_then(Value::as_object)
            .ok_or_else(|| TrackingError::render("checkout_complete requires a `calls` object"))?;

        let mut lines = vec!["ga('require', 'ecommerce');".to_string()];
        for (name, payloads) in calls {
            let payloads = payloads.as_array().ok_or_else(|| {
                TrackingError::render(format!("call `{name}` must map to an array"))
            })?;
            for payload in payloads {
                lines.push(format!(
                    "ga('{}', {});",
                    escape_single_quoted(name),
                    script_safe_json(&serde_json::to_string(payload)?)
                ));
            }
        }
        lines.push("ga('ecommerce:send');".to_string());

        Ok(lines.join("\n"))
    }
}

impl TemplateRenderer for UniversalScriptRenderer {
    fn render(&self, template_name: &str, parameters: &Value) -> TrackingResult<String> {
        let template = template_name.rsplit('/').next().unwrap_or(template_name);
        match template {
            "checkout_complete" => self.render_checkout_complete(parameters),
            _ => Err(TrackingError::TemplateNotFound(template_name.to_string())),
        }
    }
}

/// Escape serialized JSON for embedding in an inline `<script>` block.
///
/// Markup-significant characters and the JS line separators become `\uXXXX`
/// escapes. They only ever occur inside JSON strings, so the value is unchanged.
fn script_safe_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_calls_in_order_between_require_and_send() {
        let params = json!({
            "calls": {
                "ecommerce:addTransaction": [{ "id": "T-1", "affiliation": "" }],
                "ecommerce:addItem": [
                    { "id": "T-1", "sku": "A", "quantity": 1 },
                    { "id": "T-1", "sku": "B", "quantity": 2 }
                ]
            }
        });

        let code = UniversalScriptRenderer::new()
            .render("tracking/analytics/universal/checkout_complete", &params)
            .unwrap();

        assert_eq!(
            code,
            [
                "ga('require', 'ecommerce');",
                r#"ga('ecommerce:addTransaction', {"id":"T-1","affiliation":""});"#,
                r#"ga('ecommerce:addItem', {"id":"T-1","sku":"A","quantity":1});"#,
                r#"ga('ecommerce:addItem', {"id":"T-1","sku":"B","quantity":2});"#,
                "ga('ecommerce:send');",
            ]
            .join("\n")
        );
    }

    #[test]
    fn empty_groups_render_nothing() {
        let params = json!({ "calls": { "ecommerce:addItem": [] } });
        let code = UniversalScriptRenderer::new()
            .render("checkout_complete", &params)
            .unwrap();
        assert_eq!(code, "ga('require', 'ecommerce');\nga('ecommerce:send');");
    }

    #[test]
    fn unknown_template_is_not_found() {
        let err = UniversalScriptRenderer::new()
            .render("tracking/analytics/universal/product_view", &json!({}))
            .unwrap_err();
        match err {
            TrackingError::TemplateNotFound(name) => {
                assert_eq!(name, "tracking/analytics/universal/product_view")
            }
            other => panic!("Expected TemplateNotFound, got {other:?}"),
        }
    }

    #[test]
    fn missing_calls_parameter_fails_to_render() {
        let err = UniversalScriptRenderer::new()
            .render("checkout_complete", &json!({ "items": [] }))
            .unwrap_err();
        assert!(matches!(err, TrackingError::Render(_)));
    }

    #[test]
    fn payload_strings_cannot_close_the_script_block() {
        let params = json!({
            "calls": {
                "ecommerce:addItem": [
                    { "name": "</script><script>alert(1)</script>", "category": "Tea & Co" }
                ]
            }
        });

        let code = UniversalScriptRenderer::new()
            .render("checkout_complete", &params)
            .unwrap();

        assert!(!code.contains("</script>"));
        assert!(!code.contains('<'));
        assert!(code.contains(
            r#"{"name":"\u003c/script\u003e\u003cscript\u003ealert(1)\u003c/script\u003e","category":"Tea \u0026 Co"}"#
        ));
    }

    #[test]
    fn escaped_payload_parses_back_to_the_same_value() {
        let payload = json!({ "name": "a<b>&c\u{2028}d\u{2029}" });
        let escaped = script_safe_json(&serde_json::to_string(&payload).unwrap());

        assert!(!escaped.contains('\u{2028}'));
        assert!(!escaped.contains('\u{2029}'));
        let parsed: Value = serde_json::from_str(&escaped).unwrap();
        assert_eq!(parsed, payload);
    }

    #[test]
    fn call_names_are_quoted_safely() {
        assert_eq!(escape_single_quoted("it's"), "it\\'s");
    }
}
