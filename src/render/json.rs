use crate::aggregate::AggregatedModel;

/// Folder → record-list map, pretty-printed, newline-terminated.
pub fn render_json(model: &AggregatedModel) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(model.groups())?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Aggregator;
    use crate::render::fixtures::{colliding_model, model, record};
    use serde_json::Value;

    #[test]
    fn renders_folder_map_with_records_in_order() {
        let model = model(vec![
            record("/z/A.cs", "Alpha", 3, "class Alpha { Cache c; }"),
            record("/a/B.cs", "Beta", 9, "class Beta { Cache c; }"),
            record("/z/C.cs", "Gamma", 1, "class Gamma { Cache c; }"),
        ]);
        let json = render_json(&model).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["/a", "/z"]);
        assert!(json.find("\"/a\"").unwrap() < json.find("\"/z\"").unwrap());

        let z = value["/z"].as_array().unwrap();
        assert_eq!(z[0]["className"], "Alpha");
        assert_eq!(z[1]["className"], "Gamma");
        assert_eq!(z[0]["line"], 3);
        assert_eq!(z[0]["match"], "Cache");
        assert_eq!(z[0]["namespace"], "Acme");
        assert_eq!(z[0]["interfaces"][0], "ICache<string>");
        assert!(z[0].get("references").is_none());
    }

    #[test]
    fn empty_model_renders_empty_object() {
        let json = render_json(&Aggregator::new("x").finish()).unwrap();
        assert_eq!(json, "{}\n");
    }

    #[test]
    fn colliding_anchors_keep_both_records() {
        let json = render_json(&colliding_model()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["/src"][0]["className"], "Foo");
        assert_eq!(value["/lib"][0]["className"], "Foo");
    }

    #[test]
    fn output_is_stable_across_runs() {
        assert_eq!(
            render_json(&colliding_model()).unwrap(),
            render_json(&colliding_model()).unwrap()
        );
    }
}
