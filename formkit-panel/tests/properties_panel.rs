//! Properties panel behaviour over a realistic invoice form

use formkit_panel::{
    EditCall, EditRecorder, PanelError, PanelView, PropertiesPanel, Widget, PLACEHOLDER,
};
use formkit_schema::{Field, FormFieldRegistry};
use serde_json::{json, Value};

const FORM: &str = include_str!("fixtures/form.json");

fn registry() -> FormFieldRegistry {
    FormFieldRegistry::import(Field::from_json(FORM).unwrap()).unwrap()
}

fn by_key<'a>(registry: &'a FormFieldRegistry, key: &str) -> &'a Field {
    registry
        .schema()
        .walk()
        .into_iter()
        .find(|f| f.key.as_deref() == Some(key))
        .unwrap()
}

fn group_labels(view: &PanelView) -> Vec<&str> {
    view.groups().iter().map(|g| g.label).collect()
}

fn entry_labels<'a>(view: &'a PanelView, group: &str) -> Vec<&'a str> {
    view.groups()
        .iter()
        .find(|g| g.label == group)
        .map(|g| g.entry_labels())
        .unwrap_or_default()
}

fn single_call(recorder: EditRecorder) -> EditCall {
    let mut calls = recorder.into_calls();
    assert_eq!(calls.len(), 1, "expected exactly one edit, got {calls:?}");
    calls.remove(0)
}

fn assert_rejected(result: Result<(), PanelError>, recorder: &EditRecorder, message: &str) {
    let err = result.unwrap_err();
    assert_eq!(err.message(), Some(message));
    assert!(recorder.is_empty(), "rejected input must not edit");
}

#[test]
fn test_renders_placeholder_without_selection() {
    let registry = registry();
    let view = PropertiesPanel::new(None, &registry).view();
    assert_eq!(
        view,
        PanelView::Empty {
            placeholder: PLACEHOLDER
        }
    );
}

#[test]
fn test_renders_header_for_selection() {
    let registry = registry();
    let field = by_key(&registry, "creditor");
    let view = PropertiesPanel::new(Some(field), &registry).view();

    let PanelView::Populated { header, .. } = view else {
        panic!("expected a populated panel");
    };
    assert_eq!(header.label.as_deref(), Some("Creditor"));
    assert_eq!(header.type_label, Some("TEXT FIELD"));
    assert_eq!(header.icon, Some("textfield"));
}

#[test]
fn test_text_header_is_shortened() {
    let registry = registry();
    let field = registry.get("Text_1").unwrap();
    let view = PropertiesPanel::new(Some(field), &registry).view();
    let PanelView::Populated { header, .. } = view else {
        panic!("expected a populated panel");
    };
    assert_eq!(header.label.as_deref(), Some("# Invoice\nLorem _ipsum_ __dolo..."));
}

mod fields {
    use super::*;

    #[test]
    fn test_default() {
        let registry = registry();
        let view = PropertiesPanel::new(Some(registry.schema()), &registry).view();
        assert_eq!(group_labels(&view), vec!["General"]);
        assert_eq!(entry_labels(&view, "General"), vec!["ID"]);
    }

    #[test]
    fn test_button() {
        let registry = registry();
        let view = PropertiesPanel::new(Some(by_key(&registry, "submit")), &registry).view();
        assert_eq!(group_labels(&view), vec!["General", "Custom properties"]);
        assert_eq!(entry_labels(&view, "General"), vec!["Field label", "Action"]);
    }

    #[test]
    fn test_checkbox() {
        let registry = registry();
        let view = PropertiesPanel::new(Some(by_key(&registry, "approved")), &registry).view();
        assert_eq!(group_labels(&view), vec!["General", "Custom properties"]);
        assert_eq!(
            entry_labels(&view, "General"),
            vec![
                "Field label",
                "Field description",
                "Key",
                "Visible",
                "Default value",
                "Disabled"
            ]
        );
    }

    #[test]
    fn test_radio() {
        let registry = registry();
        let view = PropertiesPanel::new(Some(by_key(&registry, "product")), &registry).view();
        assert_eq!(
            group_labels(&view),
            vec![
                "General",
                "Values source",
                "Static values",
                "Validation",
                "Custom properties"
            ]
        );
        assert_eq!(entry_labels(&view, "Values source"), vec!["Type"]);
        assert_eq!(
            entry_labels(&view, "Static values"),
            vec!["Label", "Value", "Label", "Value"]
        );
        assert_eq!(entry_labels(&view, "Validation"), vec!["Required"]);
    }

    #[test]
    fn test_select() {
        let registry = registry();
        let view = PropertiesPanel::new(Some(by_key(&registry, "language")), &registry).view();
        assert_eq!(
            group_labels(&view),
            vec![
                "General",
                "Values source",
                "Static values",
                "Validation",
                "Custom properties"
            ]
        );
        assert_eq!(
            entry_labels(&view, "General"),
            vec![
                "Field label",
                "Field description",
                "Key",
                "Visible",
                "Default value",
                "Disabled"
            ]
        );
        assert_eq!(entry_labels(&view, "Values source"), vec!["Type"]);
        assert_eq!(
            entry_labels(&view, "Static values"),
            vec!["Label", "Value", "Label", "Value"]
        );
        assert_eq!(entry_labels(&view, "Validation"), vec!["Required"]);

        let default_value = view.entry("defaultValue").unwrap();
        assert_eq!(default_value.value, json!(""));
        let choices: Vec<&str> = default_value.choices().iter().map(|c| c.value.as_str()).collect();
        assert_eq!(choices, vec!["", "german", "english"]);
    }

    #[test]
    fn test_static_taglist() {
        let registry = registry();
        let view = PropertiesPanel::new(Some(by_key(&registry, "tags")), &registry).view();
        assert_eq!(
            group_labels(&view),
            vec!["General", "Values source", "Static values", "Custom properties"]
        );
        assert_eq!(
            entry_labels(&view, "General"),
            vec!["Field label", "Field description", "Key", "Visible", "Disabled"]
        );
        assert_eq!(entry_labels(&view, "Values source"), vec!["Type"]);
        assert_eq!(
            entry_labels(&view, "Static values"),
            vec!["Label", "Value", "Label", "Value", "Label", "Value"]
        );
        assert!(view.entry("defaultValue").is_none());
    }

    #[test]
    fn test_checklist_has_no_validation() {
        let registry = registry();
        let view = PropertiesPanel::new(Some(by_key(&registry, "mailto")), &registry).view();
        assert_eq!(
            group_labels(&view),
            vec!["General", "Values source", "Static values", "Custom properties"]
        );
        assert_eq!(
            entry_labels(&view, "General"),
            vec!["Field label", "Field description", "Key", "Visible", "Disabled"]
        );
    }

    #[test]
    fn test_number() {
        let registry = registry();
        let view = PropertiesPanel::new(Some(by_key(&registry, "amount")), &registry).view();
        assert_eq!(
            group_labels(&view),
            vec!["General", "Validation", "Custom properties"]
        );
        assert_eq!(
            entry_labels(&view, "Validation"),
            vec!["Required", "Minimum", "Maximum"]
        );
    }

    #[test]
    fn test_textfield() {
        let registry = registry();
        let view = PropertiesPanel::new(Some(by_key(&registry, "creditor")), &registry).view();
        assert_eq!(
            entry_labels(&view, "Validation"),
            vec![
                "Required",
                "Minimum length",
                "Maximum length",
                "Regular expression pattern"
            ]
        );
        assert_eq!(
            entry_labels(&view, "Custom properties"),
            vec!["Key", "Value", "Key", "Value"]
        );
    }

    #[test]
    fn test_conditionally_visible_textfield() {
        let registry = registry();
        let view = PropertiesPanel::new(Some(by_key(&registry, "approvedBy")), &registry).view();
        assert_eq!(
            entry_labels(&view, "General"),
            vec![
                "Field label",
                "Field description",
                "Key",
                "Visible",
                "Conditional Expression",
                "Default value",
                "Disabled"
            ]
        );
    }

    #[test]
    fn test_columns_and_text() {
        let registry = registry();
        let columns = registry.get("Columns_1").unwrap();
        let view = PropertiesPanel::new(Some(columns), &registry).view();
        assert_eq!(entry_labels(&view, "General"), vec!["Columns"]);
        assert_eq!(view.entry("columns").unwrap().value, json!(2));

        let text = registry.get("Text_1").unwrap();
        let view = PropertiesPanel::new(Some(text), &registry).view();
        assert_eq!(entry_labels(&view, "General"), vec!["Text"]);
    }

    #[test]
    fn test_unknown_type_only_gets_custom_properties() {
        let schema = Field::from_json(
            r#"{"id":"form","type":"default","components":[{"id":"Sig_1","type":"signature"}]}"#,
        )
        .unwrap();
        let registry = FormFieldRegistry::import(schema).unwrap();
        let view = PropertiesPanel::new(registry.get("Sig_1"), &registry).view();
        assert_eq!(group_labels(&view), vec!["Custom properties"]);
    }
}

mod id {
    use super::*;

    fn schema() -> FormFieldRegistry {
        let schema = Field::from_json(
            r#"{"type":"default","id":"form","components":[
                {"type":"textfield","id":"foobar","key":"creditor"}]}"#,
        )
        .unwrap();
        FormFieldRegistry::import(schema).unwrap()
    }

    fn set(input: &str) -> (Result<(), PanelError>, EditRecorder) {
        let registry = schema();
        let panel = PropertiesPanel::new(Some(registry.schema()), &registry);
        let mut recorder = EditRecorder::new();
        let result = panel.set_value("id", json!(input), &mut recorder);
        (result, recorder)
    }

    #[test]
    fn test_should_not_be_empty() {
        let (result, recorder) = set("");
        assert_rejected(result, &recorder, "Must not be empty.");
    }

    #[test]
    fn test_should_not_contain_spaces() {
        let (result, recorder) = set("foo bar");
        assert_rejected(result, &recorder, "Must not contain spaces.");
    }

    #[test]
    fn test_should_be_unique() {
        let (result, recorder) = set("foobar");
        assert_rejected(result, &recorder, "Must be unique.");
    }

    #[test]
    fn test_should_be_a_valid_qname() {
        let (result, recorder) = set("foo:bar:baz");
        assert_rejected(result, &recorder, "Must be a valid QName.");
    }

    #[test]
    fn test_should_change_id() {
        let (result, recorder) = set("invoice");
        result.unwrap();
        let call = single_call(recorder);
        assert_eq!(call.field_id, "form");
        assert_eq!(call.path(), vec!["id"]);
        assert_eq!(call.value, Some(json!("invoice")));
    }
}

mod key {
    use super::*;

    #[test]
    fn test_should_be_unique() {
        let registry = registry();
        let panel = PropertiesPanel::new(Some(by_key(&registry, "creditor")), &registry);
        let mut recorder = EditRecorder::new();
        let result = panel.set_value("key", json!("amount"), &mut recorder);
        assert_rejected(result, &recorder, "Must be unique.");
    }

    #[test]
    fn test_own_key_is_not_a_conflict() {
        let registry = registry();
        let panel = PropertiesPanel::new(Some(by_key(&registry, "creditor")), &registry);
        let mut recorder = EditRecorder::new();
        panel
            .set_value("key", json!("creditor"), &mut recorder)
            .unwrap();
        assert_eq!(single_call(recorder).value, Some(json!("creditor")));
    }
}

mod button {
    use super::*;

    #[test]
    fn test_should_change_action() {
        let registry = registry();
        let field = by_key(&registry, "reset");
        let panel = PropertiesPanel::new(Some(field), &registry);
        assert_eq!(panel.view().entry("action").unwrap().value, json!("reset"));

        let mut recorder = EditRecorder::new();
        panel
            .set_value("action", json!("submit"), &mut recorder)
            .unwrap();
        let call = single_call(recorder);
        assert_eq!(call.path(), vec!["action"]);
        assert_eq!(call.value, Some(json!("submit")));
    }

    #[test]
    fn test_rejects_unknown_action() {
        let registry = registry();
        let panel = PropertiesPanel::new(Some(by_key(&registry, "reset")), &registry);
        let mut recorder = EditRecorder::new();
        let result = panel.set_value("action", json!("launch"), &mut recorder);
        assert_rejected(result, &recorder, "Must be one of the available options.");
    }
}

mod default_value {
    use super::*;

    #[test]
    fn test_checkbox_should_add_default_value() {
        let registry = registry();
        let panel = PropertiesPanel::new(Some(by_key(&registry, "approved")), &registry);
        assert_eq!(
            panel.view().entry("defaultValue").unwrap().value,
            json!("false")
        );

        let mut recorder = EditRecorder::new();
        panel
            .set_value("defaultValue", json!("true"), &mut recorder)
            .unwrap();
        let call = single_call(recorder);
        assert_eq!(call.path(), vec!["defaultValue"]);
        assert_eq!(call.value, Some(json!(true)));
    }

    #[test]
    fn test_radio_should_add_and_remove_default_value() {
        let registry = registry();
        let panel = PropertiesPanel::new(Some(by_key(&registry, "product")), &registry);

        let mut recorder = EditRecorder::new();
        panel
            .set_value("defaultValue", json!("camunda-platform"), &mut recorder)
            .unwrap();
        assert_eq!(single_call(recorder).value, Some(json!("camunda-platform")));

        let mut recorder = EditRecorder::new();
        panel
            .set_value("defaultValue", json!(""), &mut recorder)
            .unwrap();
        assert_eq!(single_call(recorder).value, None);
    }

    #[test]
    fn test_number_default_must_be_numeric() {
        let registry = registry();
        let panel = PropertiesPanel::new(Some(by_key(&registry, "amount")), &registry);

        let mut recorder = EditRecorder::new();
        let result = panel.set_value("defaultValue", json!("ten"), &mut recorder);
        assert_rejected(result, &recorder, "Must be a number.");

        let mut recorder = EditRecorder::new();
        panel
            .set_value("defaultValue", json!("10"), &mut recorder)
            .unwrap();
        assert_eq!(single_call(recorder).value, Some(json!(10)));
    }
}

mod values {
    use super::*;

    #[test]
    fn test_should_add_value() {
        let registry = registry();
        let field = by_key(&registry, "product");
        let panel = PropertiesPanel::new(Some(field), &registry);
        let mut recorder = EditRecorder::new();
        panel.add_item("staticValues", &mut recorder).unwrap();

        let call = single_call(recorder);
        assert_eq!(call.path(), vec!["values"]);
        assert_eq!(
            call.value,
            Some(json!([
                { "label": "Camunda Platform", "value": "camunda-platform" },
                { "label": "Camunda Cloud", "value": "camunda-cloud" },
                { "label": "Value 3", "value": "value3" }
            ]))
        );
    }

    #[test]
    fn test_should_remove_value() {
        let registry = registry();
        let field = by_key(&registry, "product");
        let panel = PropertiesPanel::new(Some(field), &registry);
        let mut recorder = EditRecorder::new();
        panel
            .remove_item("Radio_1-staticValues-0", &mut recorder)
            .unwrap();

        assert_eq!(
            single_call(recorder).value,
            Some(json!([{ "label": "Camunda Cloud", "value": "camunda-cloud" }]))
        );
    }

    #[test]
    fn test_value_should_not_be_empty() {
        let registry = registry();
        let panel = PropertiesPanel::new(Some(by_key(&registry, "mailto")), &registry);
        let mut recorder = EditRecorder::new();
        let result = panel.set_value("Checklist_1-staticValues-0-value", json!(""), &mut recorder);
        assert_rejected(result, &recorder, "Must not be empty.");
    }

    #[test]
    fn test_value_should_be_unique() {
        let registry = registry();
        let panel = PropertiesPanel::new(Some(by_key(&registry, "mailto")), &registry);
        let mut recorder = EditRecorder::new();
        let result = panel.set_value(
            "Checklist_1-staticValues-0-value",
            json!("manager"),
            &mut recorder,
        );
        assert_rejected(result, &recorder, "Must be unique.");
    }

    #[test]
    fn test_label_edit_rewrites_list() {
        let registry = registry();
        let panel = PropertiesPanel::new(Some(by_key(&registry, "tags")), &registry);
        let mut recorder = EditRecorder::new();
        panel
            .set_value("Taglist_1-staticValues-1-label", json!("Second"), &mut recorder)
            .unwrap();
        let value = single_call(recorder).value.unwrap();
        assert_eq!(value[1], json!({ "label": "Second", "value": "tag2" }));
        assert_eq!(value.as_array().unwrap().len(), 3);
    }
}

mod dynamic_values {
    use super::*;

    #[test]
    fn test_should_configure_input_source_and_cleanup_static_source() {
        let registry = registry();
        let panel = PropertiesPanel::new(Some(by_key(&registry, "product")), &registry);
        let mut recorder = EditRecorder::new();
        panel
            .set_value("valuesSource", json!("input"), &mut recorder)
            .unwrap();

        let calls: Vec<(Vec<&str>, Option<Value>)> = recorder
            .calls()
            .iter()
            .map(|c| (c.path(), c.value.clone()))
            .collect();
        assert_eq!(
            calls,
            vec![(vec!["values"], None), (vec!["valuesKey"], Some(json!("")))]
        );
    }

    #[test]
    fn test_switching_back_restores_empty_static_list() {
        let mut registry = registry();
        registry
            .edit_field("Select_1", &["values"], None)
            .unwrap();
        registry
            .edit_field("Select_1", &["valuesKey"], Some(json!("languages")))
            .unwrap();

        let panel = PropertiesPanel::new(registry.get("Select_1"), &registry);
        let mut recorder = EditRecorder::new();
        panel
            .set_value("valuesSource", json!("static"), &mut recorder)
            .unwrap();
        let calls = recorder.into_calls();
        assert_eq!(calls[0].value, Some(json!([])));
        assert_eq!(calls[1].value, None);
    }

    #[test]
    fn test_should_configure_values_key() {
        let mut registry = registry();
        registry
            .edit_field("Radio_1", &["values"], None)
            .unwrap();
        registry
            .edit_field("Radio_1", &["valuesKey"], Some(json!("")))
            .unwrap();

        let panel = PropertiesPanel::new(registry.get("Radio_1"), &registry);
        let mut recorder = EditRecorder::new();
        panel
            .set_value("valuesKey", json!("newKey"), &mut recorder)
            .unwrap();
        let call = single_call(recorder);
        assert_eq!(call.path(), vec!["valuesKey"]);
        assert_eq!(call.value, Some(json!("newKey")));
    }

    #[test]
    fn test_values_key_must_not_be_empty() {
        let mut registry = registry();
        registry
            .edit_field("Select_1", &["values"], None)
            .unwrap();
        registry
            .edit_field("Select_1", &["valuesKey"], Some(json!("languages")))
            .unwrap();

        let panel = PropertiesPanel::new(registry.get("Select_1"), &registry);
        let mut recorder = EditRecorder::new();
        let result = panel.set_value("valuesKey", json!(""), &mut recorder);
        assert_rejected(result, &recorder, "Must not be empty.");

        let result = panel.set_value("valuesKey", json!("all languages"), &mut recorder);
        assert_rejected(result, &recorder, "Must not contain spaces.");
    }

    #[test]
    fn test_entries_should_change() {
        let mut registry = registry();
        registry
            .edit_field("Radio_1", &["values"], None)
            .unwrap();
        registry
            .edit_field("Radio_1", &["valuesKey"], Some(json!("")))
            .unwrap();

        let view = PropertiesPanel::new(registry.get("Radio_1"), &registry).view();
        assert_eq!(
            group_labels(&view),
            vec![
                "General",
                "Values source",
                "Dynamic values",
                "Validation",
                "Custom properties"
            ]
        );
        assert_eq!(
            entry_labels(&view, "General"),
            vec!["Field label", "Field description", "Key", "Visible", "Disabled"]
        );
        assert_eq!(entry_labels(&view, "Dynamic values"), vec!["Input values key"]);
    }
}

mod validation {
    use super::*;

    #[test]
    fn test_max_length_must_not_be_negative() {
        let registry = registry();
        let panel = PropertiesPanel::new(Some(by_key(&registry, "creditor")), &registry);
        let mut recorder = EditRecorder::new();
        let result = panel.set_value("maxLength", json!(-1), &mut recorder);
        assert_rejected(result, &recorder, "Should be greater than or equal to 0.");
    }

    #[test]
    fn test_max_length_writes_whole_validate_object() {
        let registry = registry();
        let panel = PropertiesPanel::new(Some(by_key(&registry, "creditor")), &registry);
        let mut recorder = EditRecorder::new();
        panel
            .set_value("maxLength", json!(1), &mut recorder)
            .unwrap();
        let call = single_call(recorder);
        assert_eq!(call.path(), vec!["validate"]);
        assert_eq!(call.value, Some(json!({ "required": true, "maxLength": 1 })));
    }

    #[test]
    fn test_min_length_must_be_a_number() {
        let registry = registry();
        let panel = PropertiesPanel::new(Some(by_key(&registry, "creditor")), &registry);
        let mut recorder = EditRecorder::new();
        let result = panel.set_value("minLength", json!("few"), &mut recorder);
        assert_rejected(result, &recorder, "Must be a number.");
    }

    #[test]
    fn test_pattern_must_be_a_regex() {
        let registry = registry();
        let panel = PropertiesPanel::new(Some(by_key(&registry, "invoiceNumber")), &registry);
        let mut recorder = EditRecorder::new();
        let result = panel.set_value("pattern", json!("^C-[0-9+$"), &mut recorder);
        assert_rejected(result, &recorder, "Must be a valid regular expression.");
    }

    #[test]
    fn test_clearing_pattern_drops_the_rule() {
        let registry = registry();
        let panel = PropertiesPanel::new(Some(by_key(&registry, "invoiceNumber")), &registry);
        let mut recorder = EditRecorder::new();
        panel
            .set_value("pattern", json!(""), &mut recorder)
            .unwrap();
        assert_eq!(single_call(recorder).value, Some(json!({})));
    }

    #[test]
    fn test_required_toggles() {
        let registry = registry();
        let panel = PropertiesPanel::new(Some(by_key(&registry, "language")), &registry);
        let mut recorder = EditRecorder::new();
        panel
            .set_value("required", json!(true), &mut recorder)
            .unwrap();
        assert_eq!(single_call(recorder).value, Some(json!({ "required": true })));
    }
}

mod custom_properties {
    use super::*;

    #[test]
    fn test_should_add_property() {
        let registry = registry();
        let panel = PropertiesPanel::new(Some(by_key(&registry, "creditor")), &registry);
        let mut recorder = EditRecorder::new();
        panel.add_item("customValues", &mut recorder).unwrap();

        let value = single_call(recorder).value.unwrap();
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"firstName":"Jane","lastName":"Doe","key3":"value"}"#
        );
    }

    #[test]
    fn test_should_add_first_property() {
        let registry = registry();
        let panel = PropertiesPanel::new(Some(by_key(&registry, "amount")), &registry);
        let mut recorder = EditRecorder::new();
        panel.add_item("customValues", &mut recorder).unwrap();
        assert_eq!(single_call(recorder).value, Some(json!({ "key1": "value" })));
    }

    #[test]
    fn test_should_remove_property() {
        let registry = registry();
        let panel = PropertiesPanel::new(Some(by_key(&registry, "creditor")), &registry);
        let mut recorder = EditRecorder::new();
        panel
            .remove_item("Textfield_1-property-0", &mut recorder)
            .unwrap();
        assert_eq!(
            single_call(recorder).value,
            Some(json!({ "lastName": "Doe" }))
        );
    }

    #[test]
    fn test_renaming_keeps_position() {
        let registry = registry();
        let panel = PropertiesPanel::new(Some(by_key(&registry, "creditor")), &registry);
        let mut recorder = EditRecorder::new();
        panel
            .set_value("Textfield_1-property-0-key", json!("givenName"), &mut recorder)
            .unwrap();
        let value = single_call(recorder).value.unwrap();
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"givenName":"Jane","lastName":"Doe"}"#
        );
    }

    #[test]
    fn test_key_must_be_unique() {
        let registry = registry();
        let panel = PropertiesPanel::new(Some(by_key(&registry, "creditor")), &registry);
        let mut recorder = EditRecorder::new();
        let result = panel.set_value("Textfield_1-property-1-key", json!("firstName"), &mut recorder);
        assert_rejected(result, &recorder, "Must be unique.");
    }

    #[test]
    fn test_unknown_item_is_reported() {
        let registry = registry();
        let panel = PropertiesPanel::new(Some(by_key(&registry, "creditor")), &registry);
        let mut recorder = EditRecorder::new();
        assert!(matches!(
            panel.remove_item("Textfield_1-property-9", &mut recorder),
            Err(PanelError::UnknownItem { .. })
        ));
    }
}

mod visibility {
    use super::*;

    #[test]
    fn test_choosing_none_clears_expression() {
        let mut registry = registry();
        registry
            .edit_field("Textfield_3", &["visibleExpression"], Some(json!("true")))
            .unwrap();
        let panel = PropertiesPanel::new(registry.get("Textfield_3"), &registry);
        let mut recorder = EditRecorder::new();
        panel
            .set_value("visible", json!("none"), &mut recorder)
            .unwrap();

        let calls = recorder.into_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].value, Some(json!("none")));
        assert_eq!(calls[1].path(), vec!["visibleExpression"]);
        assert_eq!(calls[1].value, None);
    }

    #[test]
    fn test_field_cannot_control_itself() {
        let registry = registry();
        let panel = PropertiesPanel::new(registry.get("Checkbox_1"), &registry);
        let mut recorder = EditRecorder::new();
        let result = panel.set_value("visible", json!("Checkbox_1"), &mut recorder);
        assert_rejected(result, &recorder, "Must be one of the available options.");
    }
}

mod columns {
    use super::*;

    #[test]
    fn test_growing_adds_empty_columns() {
        let registry = registry();
        let panel = PropertiesPanel::new(registry.get("Columns_1"), &registry);
        let mut recorder = EditRecorder::new();
        panel
            .set_value("columns", json!(3), &mut recorder)
            .unwrap();

        let value = single_call(recorder).value.unwrap();
        let columns = value.as_array().unwrap();
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0]["id"], "Column_1");
        assert_eq!(columns[2]["type"], "default");
        assert!(columns[2]["id"].as_str().unwrap().starts_with("Field_"));
    }

    #[test]
    fn test_must_be_at_least_one() {
        let registry = registry();
        let panel = PropertiesPanel::new(registry.get("Columns_1"), &registry);
        let mut recorder = EditRecorder::new();
        let result = panel.set_value("columns", json!(0), &mut recorder);
        assert_rejected(result, &recorder, "Should be greater than or equal to 1.");
    }

    #[test]
    fn test_count_is_capped() {
        let registry = registry();
        let panel = PropertiesPanel::new(registry.get("Columns_1"), &registry);
        let mut recorder = EditRecorder::new();

        for input in [json!("17"), json!("200000"), json!("1e19")] {
            let result = panel.set_value("columns", input, &mut recorder);
            assert_rejected(result, &recorder, "Should be less than or equal to 16.");
        }

        panel
            .set_value("columns", json!("16"), &mut recorder)
            .unwrap();
        let value = single_call(recorder).value.unwrap();
        assert_eq!(value.as_array().unwrap().len(), 16);
    }

    #[test]
    fn test_entry_advertises_bounds() {
        let registry = registry();
        let view = PropertiesPanel::new(registry.get("Columns_1"), &registry).view();
        assert_eq!(
            view.entry("columns").unwrap().widget,
            Widget::NumberField {
                min: Some(1.0),
                max: Some(16.0)
            }
        );
    }
}

#[test]
fn test_edits_apply_cleanly_to_the_registry() {
    let mut registry = registry();
    let calls = {
        let panel = PropertiesPanel::new(registry.get("Radio_1"), &registry);
        let mut recorder = EditRecorder::new();
        panel
            .set_value("valuesSource", json!("input"), &mut recorder)
            .unwrap();
        recorder.into_calls()
    };

    for call in calls {
        let path = call.path();
        registry
            .edit_field(&call.field_id, &path, call.value.clone())
            .unwrap();
    }

    let radio = registry.get("Radio_1").unwrap();
    assert!(radio.values.is_none());
    assert_eq!(radio.values_key.as_deref(), Some(""));
}
