//! Tab types — positioned form fields placed on envelope documents.
//!
//! Tabs are modeled as a tagged union: each variant carries only the fields
//! that exist for that tab type, and [`TabSet`] groups them into the
//! per-type arrays the vendor API expects (`signHereTabs`, `textTabs`, …)
//! by matching exhaustively on the variant.

use serde::Serialize;

/// Vertical distance between stacked radio options, in pixels.
pub const RADIO_STACK_STEP: u32 = 25;

// ─── Position ────────────────────────────────────────────────────────────────

/// Where a tab lands on its page: an absolute pixel offset or a position
/// relative to an anchor string found in the document text. The two modes are
/// mutually exclusive by construction — a serialized tab never carries both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabPosition {
    Absolute { x: u32, y: u32 },
    Anchor {
        anchor_string: String,
        x_offset: i32,
        y_offset: i32,
    },
}

impl TabPosition {
    /// Anchor position with zero offsets.
    pub fn at_anchor(anchor_string: impl Into<String>) -> Self {
        TabPosition::Anchor {
            anchor_string: anchor_string.into(),
            x_offset: 0,
            y_offset: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
struct WirePosition {
    #[serde(skip_serializing_if = "Option::is_none")]
    x_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    anchor_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    anchor_units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    anchor_x_offset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    anchor_y_offset: Option<String>,
}

impl From<&TabPosition> for WirePosition {
    fn from(position: &TabPosition) -> Self {
        match position {
            TabPosition::Absolute { x, y } => WirePosition {
                x_position: Some(x.to_string()),
                y_position: Some(y.to_string()),
                ..WirePosition::default()
            },
            TabPosition::Anchor {
                anchor_string,
                x_offset,
                y_offset,
            } => WirePosition {
                anchor_string: Some(anchor_string.clone()),
                anchor_units: Some("pixels".to_string()),
                anchor_x_offset: Some(x_offset.to_string()),
                anchor_y_offset: Some(y_offset.to_string()),
                ..WirePosition::default()
            },
        }
    }
}

// ─── Tab variants ────────────────────────────────────────────────────────────

/// Signature tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignHereTab {
    pub document_id: String,
    pub page_number: u32,
    pub position: TabPosition,
}

impl SignHereTab {
    pub fn new(document_id: impl Into<String>, page_number: u32, position: TabPosition) -> Self {
        Self {
            document_id: document_id.into(),
            page_number,
            position,
        }
    }
}

/// Free-text tab. Merge-field tabs are a locked, anchor-positioned special
/// case labelled after their placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTab {
    pub document_id: Option<String>,
    pub page_number: Option<u32>,
    pub position: TabPosition,
    pub value: Option<String>,
    pub font_size: Option<String>,
    pub tab_label: Option<String>,
    pub locked: bool,
    pub required: bool,
}

impl TextTab {
    pub fn new(document_id: impl Into<String>, page_number: u32, position: TabPosition) -> Self {
        Self {
            document_id: Some(document_id.into()),
            page_number: Some(page_number),
            position,
            value: None,
            font_size: None,
            tab_label: None,
            locked: false,
            required: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.tab_label = Some(label.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Document merge field, applied as a locked text tab anchored on its
/// placeholder string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeField {
    pub placeholder: String,
    pub value: String,
    pub font_size: Option<String>,
}

impl MergeField {
    pub fn new(placeholder: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            value: value.into(),
            font_size: None,
        }
    }

    pub fn with_font_size(mut self, font_size: impl Into<String>) -> Self {
        self.font_size = Some(font_size.into());
        self
    }

    /// The text tab this merge field becomes: anchored on the placeholder,
    /// locked against edits, labelled `merge_{placeholder}`.
    pub fn into_text_tab(self) -> TextTab {
        let label = format!("merge_{}", self.placeholder);
        TextTab {
            document_id: None,
            page_number: None,
            position: TabPosition::at_anchor(self.placeholder),
            value: Some(self.value),
            font_size: Some(self.font_size.unwrap_or_else(|| "Size12".to_string())),
            tab_label: Some(label),
            locked: true,
            required: false,
        }
    }
}

/// Single-select dropdown tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTab {
    pub document_id: String,
    pub page_number: u32,
    pub position: TabPosition,
    pub tab_label: Option<String>,
    pub required: bool,
    pub items: Vec<ListItem>,
}

/// One selectable entry of a [`ListTab`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub text: String,
    pub value: String,
    pub selected: bool,
}

impl ListTab {
    /// Build a list tab from a comma-separated option string. Each option's
    /// value is the lower-cased, underscore-joined text; the first option is
    /// pre-selected.
    pub fn from_options(
        document_id: impl Into<String>,
        page_number: u32,
        position: TabPosition,
        options: &str,
    ) -> Self {
        let items = options
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .enumerate()
            .map(|(idx, text)| ListItem {
                text: text.to_string(),
                value: text
                    .to_lowercase()
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join("_"),
                selected: idx == 0,
            })
            .collect();

        Self {
            document_id: document_id.into(),
            page_number,
            position,
            tab_label: None,
            required: false,
            items,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.tab_label = Some(label.into());
        self
    }
}

/// Mutually exclusive options stacked under one group name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioGroupTab {
    pub document_id: String,
    pub group_name: String,
    pub radios: Vec<Radio>,
}

/// One option of a [`RadioGroupTab`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Radio {
    pub page_number: u32,
    pub x: u32,
    pub y: u32,
    pub value: String,
}

impl RadioGroupTab {
    /// Build a radio group from a comma-separated option string, stacking
    /// the options downward from `(x, y)` in [`RADIO_STACK_STEP`] increments.
    pub fn stacked(
        document_id: impl Into<String>,
        group_name: impl Into<String>,
        page_number: u32,
        x: u32,
        y: u32,
        options: &str,
    ) -> Self {
        let radios = options
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .enumerate()
            .map(|(idx, value)| Radio {
                page_number,
                x,
                y: y + idx as u32 * RADIO_STACK_STEP,
                value: value.to_string(),
            })
            .collect();

        Self {
            document_id: document_id.into(),
            group_name: group_name.into(),
            radios,
        }
    }
}

/// Computed tab. Always locked — the formula output is never editable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaTab {
    pub document_id: String,
    pub page_number: u32,
    pub position: TabPosition,
    pub tab_label: Option<String>,
    pub formula: String,
}

impl FormulaTab {
    pub fn new(
        document_id: impl Into<String>,
        page_number: u32,
        position: TabPosition,
        formula: impl Into<String>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            page_number,
            position,
            tab_label: None,
            formula: formula.into(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.tab_label = Some(label.into());
        self
    }
}

/// A tab of any type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tab {
    SignHere(SignHereTab),
    Text(TextTab),
    List(ListTab),
    RadioGroup(RadioGroupTab),
    Formula(FormulaTab),
}

// ─── Wire structs ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignHereTabWire {
    document_id: String,
    page_number: String,
    #[serde(flatten)]
    position: WirePosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct TextTabWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    document_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_number: Option<String>,
    #[serde(flatten)]
    position: WirePosition,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tab_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    locked: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListItemWire {
    text: String,
    value: String,
    selected: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListTabWire {
    document_id: String,
    page_number: String,
    #[serde(flatten)]
    position: WirePosition,
    #[serde(skip_serializing_if = "Option::is_none")]
    tab_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<String>,
    list_items: Vec<ListItemWire>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct RadioWire {
    page_number: String,
    x_position: String,
    y_position: String,
    value: String,
    selected: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct RadioGroupTabWire {
    document_id: String,
    group_name: String,
    radios: Vec<RadioWire>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct FormulaTabWire {
    document_id: String,
    page_number: String,
    #[serde(flatten)]
    position: WirePosition,
    #[serde(skip_serializing_if = "Option::is_none")]
    tab_label: Option<String>,
    formula: String,
    locked: String,
}

fn flag(value: bool) -> Option<String> {
    value.then(|| "true".to_string())
}

// ─── TabSet ──────────────────────────────────────────────────────────────────

/// A recipient's tabs, grouped into the vendor's per-type arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TabSet {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    sign_here_tabs: Vec<SignHereTabWire>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    text_tabs: Vec<TextTabWire>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    list_tabs: Vec<ListTabWire>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    radio_group_tabs: Vec<RadioGroupTabWire>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    formula_tabs: Vec<FormulaTabWire>,
}

impl TabSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.sign_here_tabs.is_empty()
            && self.text_tabs.is_empty()
            && self.list_tabs.is_empty()
            && self.radio_group_tabs.is_empty()
            && self.formula_tabs.is_empty()
    }

    pub fn push(&mut self, tab: Tab) {
        match tab {
            Tab::SignHere(t) => self.sign_here_tabs.push(SignHereTabWire {
                document_id: t.document_id,
                page_number: t.page_number.to_string(),
                position: (&t.position).into(),
            }),
            Tab::Text(t) => self.text_tabs.push(TextTabWire {
                document_id: t.document_id,
                page_number: t.page_number.map(|p| p.to_string()),
                position: (&t.position).into(),
                value: t.value,
                font_size: t.font_size,
                tab_label: t.tab_label,
                locked: flag(t.locked),
                required: flag(t.required),
            }),
            Tab::List(t) => self.list_tabs.push(ListTabWire {
                document_id: t.document_id,
                page_number: t.page_number.to_string(),
                position: (&t.position).into(),
                tab_label: t.tab_label,
                required: flag(t.required),
                list_items: t
                    .items
                    .into_iter()
                    .map(|item| ListItemWire {
                        text: item.text,
                        value: item.value,
                        selected: if item.selected { "true" } else { "false" }.to_string(),
                    })
                    .collect(),
            }),
            Tab::RadioGroup(t) => self.radio_group_tabs.push(RadioGroupTabWire {
                document_id: t.document_id,
                group_name: t.group_name,
                radios: t
                    .radios
                    .into_iter()
                    .map(|r| RadioWire {
                        page_number: r.page_number.to_string(),
                        x_position: r.x.to_string(),
                        y_position: r.y.to_string(),
                        value: r.value,
                        selected: "false".to_string(),
                    })
                    .collect(),
            }),
            Tab::Formula(t) => self.formula_tabs.push(FormulaTabWire {
                document_id: t.document_id,
                page_number: t.page_number.to_string(),
                position: (&t.position).into(),
                tab_label: t.tab_label,
                formula: t.formula,
                locked: "true".to_string(),
            }),
        }
    }
}

impl FromIterator<Tab> for TabSet {
    fn from_iter<I: IntoIterator<Item = Tab>>(iter: I) -> Self {
        let mut set = TabSet::new();
        for tab in iter {
            set.push(tab);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn test_absolute_sign_here_has_no_anchor_fields() {
        let mut tabs = TabSet::new();
        tabs.push(Tab::SignHere(SignHereTab::new(
            "1",
            2,
            TabPosition::Absolute { x: 100, y: 150 },
        )));
        let v = to_value(&tabs).unwrap();
        let tab = &v["signHereTabs"][0];
        assert_eq!(tab["documentId"], "1");
        assert_eq!(tab["pageNumber"], "2");
        assert_eq!(tab["xPosition"], "100");
        assert_eq!(tab["yPosition"], "150");
        assert!(tab.get("anchorString").is_none());
        assert!(tab.get("anchorXOffset").is_none());
    }

    #[test]
    fn test_anchored_sign_here_has_no_absolute_fields() {
        let mut tabs = TabSet::new();
        tabs.push(Tab::SignHere(SignHereTab::new(
            "1",
            1,
            TabPosition::Anchor {
                anchor_string: "/sign-here/".into(),
                x_offset: 10,
                y_offset: -5,
            },
        )));
        let v = to_value(&tabs).unwrap();
        let tab = &v["signHereTabs"][0];
        assert_eq!(tab["anchorString"], "/sign-here/");
        assert_eq!(tab["anchorUnits"], "pixels");
        assert_eq!(tab["anchorXOffset"], "10");
        assert_eq!(tab["anchorYOffset"], "-5");
        assert!(tab.get("xPosition").is_none());
        assert!(tab.get("yPosition").is_none());
    }

    #[test]
    fn test_list_options_parse_with_first_selected() {
        let tab = ListTab::from_options("1", 1, TabPosition::Absolute { x: 100, y: 150 }, "Red, Blue, Green");
        assert_eq!(tab.items.len(), 3);
        assert_eq!(tab.items[0].value, "red");
        assert_eq!(tab.items[1].value, "blue");
        assert_eq!(tab.items[2].value, "green");
        assert!(tab.items[0].selected);
        assert!(!tab.items[1].selected);
        assert!(!tab.items[2].selected);
        assert_eq!(tab.items[0].text, "Red");
    }

    #[test]
    fn test_list_option_values_join_spaces_with_underscores() {
        let tab = ListTab::from_options(
            "1",
            1,
            TabPosition::Absolute { x: 0, y: 0 },
            "North America,  , South America",
        );
        assert_eq!(tab.items.len(), 2);
        assert_eq!(tab.items[0].value, "north_america");
        assert_eq!(tab.items[1].value, "south_america");
    }

    #[test]
    fn test_list_tab_wire_marks_only_first_selected() {
        let mut tabs = TabSet::new();
        tabs.push(Tab::List(ListTab::from_options(
            "1",
            1,
            TabPosition::Absolute { x: 100, y: 150 },
            "Red, Blue, Green",
        )));
        let v = to_value(&tabs).unwrap();
        let items = v["listTabs"][0]["listItems"].as_array().unwrap();
        assert_eq!(items[0]["selected"], "true");
        assert_eq!(items[1]["selected"], "false");
        assert_eq!(items[2]["selected"], "false");
    }

    #[test]
    fn test_radio_options_stack_at_25px_steps() {
        let tab = RadioGroupTab::stacked("1", "color", 1, 100, 150, "Red,Blue,Green");
        let ys: Vec<u32> = tab.radios.iter().map(|r| r.y).collect();
        assert_eq!(ys, vec![150, 175, 200]);
        assert_eq!(tab.radios[2].value, "Green");
    }

    #[test]
    fn test_radio_wire_is_never_preselected() {
        let mut tabs = TabSet::new();
        tabs.push(Tab::RadioGroup(RadioGroupTab::stacked(
            "1", "color", 1, 100, 150, "Red,Blue",
        )));
        let v = to_value(&tabs).unwrap();
        let radios = v["radioGroupTabs"][0]["radios"].as_array().unwrap();
        assert!(radios.iter().all(|r| r["selected"] == "false"));
        assert_eq!(v["radioGroupTabs"][0]["groupName"], "color");
    }

    #[test]
    fn test_formula_tab_is_always_locked() {
        let mut tabs = TabSet::new();
        tabs.push(Tab::Formula(FormulaTab::new(
            "1",
            1,
            TabPosition::Absolute { x: 10, y: 20 },
            "[subtotal] * 1.2",
        )));
        let v = to_value(&tabs).unwrap();
        assert_eq!(v["formulaTabs"][0]["locked"], "true");
        assert_eq!(v["formulaTabs"][0]["formula"], "[subtotal] * 1.2");
    }

    #[test]
    fn test_merge_field_becomes_locked_anchored_text_tab() {
        let mut tabs = TabSet::new();
        tabs.push(Tab::Text(
            MergeField::new("{{customer_name}}", "Acme Corp").into_text_tab(),
        ));
        let v = to_value(&tabs).unwrap();
        let tab = &v["textTabs"][0];
        assert_eq!(tab["anchorString"], "{{customer_name}}");
        assert_eq!(tab["anchorXOffset"], "0");
        assert_eq!(tab["anchorYOffset"], "0");
        assert_eq!(tab["value"], "Acme Corp");
        assert_eq!(tab["fontSize"], "Size12");
        assert_eq!(tab["locked"], "true");
        assert_eq!(tab["tabLabel"], "merge_{{customer_name}}");
        assert!(tab.get("documentId").is_none());
        assert!(tab.get("xPosition").is_none());
    }

    #[test]
    fn test_empty_tab_set_serializes_to_empty_object() {
        let tabs = TabSet::new();
        assert_eq!(to_value(&tabs).unwrap(), json!({}));
    }
}
