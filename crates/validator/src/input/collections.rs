//! Collection shape and embedded document predicates.

use std::sync::LazyLock;

use serde_json::Value;

use super::Input;
use super::coerce::truthy;

static DOCTYPE_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"(?i)^\s*<!doctype\s+html[\s>]").unwrap());

/// Elements a complete document must open. Closing tags are optional.
static HTML_SECTIONS: LazyLock<[regex::Regex; 3]> = LazyLock::new(|| {
    ["html", "head", "body"].map(|tag| regex::Regex::new(&format!(r"(?i)<{tag}[\s>]")).unwrap())
});

/// Looks up an object key or an array index.
fn member<'a>(collection: &'a Value, key: &Value) -> Option<&'a Value> {
    match (collection, key) {
        (Value::Object(map), Value::String(k)) => map.get(k),
        (Value::Object(map), Value::Number(n)) => map.get(&n.to_string()),
        (Value::Array(items), Value::Number(n)) => {
            n.as_u64().and_then(|i| usize::try_from(i).ok()).and_then(|i| items.get(i))
        }
        (Value::Array(items), Value::String(k)) => {
            k.parse::<usize>().ok().and_then(|i| items.get(i))
        }
        _ => None,
    }
}

/// Members of an array or object, in order.
fn members(collection: &Value) -> Option<Vec<&Value>> {
    match collection {
        Value::Array(items) => Some(items.iter().collect()),
        Value::Object(map) => Some(map.values().collect()),
        _ => None,
    }
}

impl Input {
    /// Member count of an array or object.
    fn count(&self) -> Option<usize> {
        match &self.raw {
            Value::Array(items) => Some(items.len()),
            Value::Object(map) => Some(map.len()),
            _ => None,
        }
    }

    /// The object has `key`, or the array has index `key`.
    #[must_use]
    pub fn key_exists(&self, key: &Value) -> bool {
        member(&self.raw, key).is_some()
    }

    /// Every member is a collection whose `key` member is truthy.
    ///
    /// Vacuously true for an empty collection.
    #[must_use]
    pub fn items_are_truthy(&self, key: &Value) -> bool {
        members(&self.raw).is_some_and(|items| {
            items
                .into_iter()
                .all(|item| member(item, key).is_some_and(truthy))
        })
    }

    /// At least one member is a collection whose `key` member is truthy.
    #[must_use]
    pub fn has_truthy_item(&self, key: &Value) -> bool {
        members(&self.raw).is_some_and(|items| {
            items
                .into_iter()
                .any(|item| member(item, key).is_some_and(truthy))
        })
    }

    /// An array or object with no members.
    #[must_use]
    pub fn is_array_empty(&self) -> bool {
        self.count() == Some(0)
    }

    /// Member count equals `expected`.
    #[must_use]
    pub fn is_count_equal_to(&self, expected: usize) -> bool {
        self.count() == Some(expected)
    }

    /// Member count above `limit`.
    #[must_use]
    pub fn is_count_more_than(&self, limit: usize) -> bool {
        self.count().is_some_and(|n| n > limit)
    }

    /// Member count below `limit`.
    #[must_use]
    pub fn is_count_less_than(&self, limit: usize) -> bool {
        self.count().is_some_and(|n| n < limit)
    }

    /// The string form is a JSON document.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.string_view()
            .is_some_and(|s| serde_json::from_str::<Value>(s).is_ok())
    }

    /// The string is a complete HTML document: a doctype followed by
    /// `html`, `head` and `body` elements.
    #[must_use]
    pub fn is_full_html(&self) -> bool {
        let Value::String(document) = &self.raw else {
            return false;
        };
        DOCTYPE_REGEX.is_match(document) && HTML_SECTIONS.iter().all(|re| re.is_match(document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keys_and_indexes() {
        let object = Input::new(json!({ "name": "x", "0": 1 }));
        assert!(object.key_exists(&json!("name")));
        assert!(object.key_exists(&json!(0)));
        assert!(!object.key_exists(&json!("age")));

        let list = Input::new(json!(["a", "b"]));
        assert!(list.key_exists(&json!(1)));
        assert!(!list.key_exists(&json!(2)));
        assert!(!Input::new("name").key_exists(&json!("name")));
    }

    #[test]
    fn truthy_items() {
        let items = Input::new(json!([
            { "active": true },
            { "active": "yes" },
            { "active": 0 },
        ]));
        assert!(!items.items_are_truthy(&json!("active")));
        assert!(items.has_truthy_item(&json!("active")));

        let all = Input::new(json!([{ "active": 1 }, { "active": [0] }]));
        assert!(all.items_are_truthy(&json!("active")));

        assert!(Input::new(json!([])).items_are_truthy(&json!("active")));
        assert!(!Input::new(json!([])).has_truthy_item(&json!("active")));
        assert!(!Input::new(json!([{ "other": true }])).has_truthy_item(&json!("active")));
    }

    #[test]
    fn counts() {
        let list = Input::new(json!([1, 2, 3]));
        assert!(list.is_count_equal_to(3));
        assert!(list.is_count_more_than(2));
        assert!(list.is_count_less_than(4));
        assert!(!list.is_array_empty());
        assert!(Input::new(json!({})).is_array_empty());
        assert!(!Input::new("").is_array_empty());
        assert!(!Input::new("abc").is_count_equal_to(3));
    }

    #[test]
    fn json_documents() {
        assert!(Input::new(r#"{"a": [1, 2]}"#).is_json());
        assert!(Input::new("123").is_json());
        assert!(Input::new(123).is_json());
        assert!(!Input::new("{a: 1}").is_json());
        assert!(!Input::new(json!({ "a": 1 })).is_json());
    }

    #[test]
    fn html_documents() {
        let page = "<!DOCTYPE html>\n<html lang=\"sv\">\n<head><title>t</title></head>\n\
                    <body><p>hej</p></body>\n</html>";
        assert!(Input::new(page).is_full_html());
        assert!(!Input::new("<p>fragment</p>").is_full_html());
        assert!(!Input::new("<html><head></head><body></body></html>").is_full_html());
    }

    #[test]
    fn html_documents_may_omit_closing_tags() {
        let page = "<!doctype html>\n<html>\n<head><title>t</title>\n<body><p>hej";
        assert!(Input::new(page).is_full_html());
        assert!(!Input::new("<!doctype html>\n<html><header>x</header>").is_full_html());
    }
}
