//! The registration form shown by the app

use crate::state::controls::{
    CheckboxGroup, FormControl, MultiSelect, OptionLayout, RadioGroup, SingleSelect, TextInput,
};
use crate::state::forms::{FieldBinding, FieldConfig, FormStore, Rule, SelectOption, ValidationRules};
use anyhow::Result;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

fn options(pairs: &[(&str, &str)]) -> Vec<SelectOption> {
    pairs
        .iter()
        .map(|(label, value)| SelectOption::new(label, value))
        .collect()
}

/// Register every field in `store` and return the controls in display order
pub fn build_registration_form(store: &mut FormStore) -> Result<Vec<FormControl>> {
    let email = FieldBinding::bind(
        store,
        FieldConfig::new("email").with_rules(
            ValidationRules::new()
                .with(Rule::required("Email is required"))
                .with(Rule::pattern(EMAIL_PATTERN, "Invalid email address")?),
        ),
    )?;

    let password = FieldBinding::bind(
        store,
        FieldConfig::new("password").with_rules(
            ValidationRules::new()
                .with(Rule::required("Password is required"))
                .with(Rule::min_length(6, "Password must be at least 6 characters")),
        ),
    )?;

    let age_group = FieldBinding::bind(
        store,
        FieldConfig::new("ageGroup")
            .with_rules(ValidationRules::new().with(Rule::required("Please select an age group"))),
    )?;

    let marital_status =
        FieldBinding::bind(store, FieldConfig::new("maritalStatus").disabled(false))?;

    let dropdown = FieldBinding::bind(
        store,
        FieldConfig::new("dropdown")
            .with_rules(ValidationRules::new().with(Rule::required("Selection is required"))),
    )?;

    let items = FieldBinding::bind(
        store,
        FieldConfig::new("items").with_rules(
            ValidationRules::new().with(Rule::required("Please select at least one item")),
        ),
    )?;

    let roles = FieldBinding::bind(
        store,
        FieldConfig::new("roles").with_rules(
            ValidationRules::new().with(Rule::required("Please select at least one role")),
        ),
    )?;

    let confirmation = FieldBinding::bind(
        store,
        FieldConfig::new("confirmation").with_rules(
            ValidationRules::new().with(Rule::required("Please confirm persons affected")),
        ),
    )?;

    Ok(vec![
        FormControl::Text(
            TextInput::new(email, "Email")
                .with_placeholder("Enter your email")
                .required_marker(true),
        ),
        FormControl::Text(
            TextInput::new(password, "Password")
                .with_placeholder("Enter your password")
                .secure(),
        ),
        FormControl::Radio(
            RadioGroup::new(
                age_group,
                "Age Group",
                options(&[("Adult", "adult"), ("Child", "child"), ("Infant", "infant")]),
            )
            .required_marker(true),
        ),
        FormControl::Radio(
            RadioGroup::new(
                marital_status,
                "Marital Status",
                options(&[
                    ("Single", "single"),
                    ("Married", "married"),
                    ("Divorced", "divorced"),
                ]),
            )
            .with_layout(OptionLayout::Horizontal),
        ),
        FormControl::Select(
            SingleSelect::new(dropdown, options(&[("Option 1", "1"), ("Option 2", "2")]))
                .with_label("Dropdown")
                .with_placeholder("Select an option")
                .searchable()
                .with_max_height(5)
                .required_marker(true),
        ),
        FormControl::MultiSelect(
            MultiSelect::new(
                items,
                options(&[
                    ("Item 1", "1"),
                    ("Item 2", "2"),
                    ("Item 3", "3"),
                    ("Item 4", "4"),
                ]),
            )
            .with_label("Select Items")
            .required_marker(true),
        ),
        FormControl::Checkbox(
            CheckboxGroup::new(roles, options(&[("VIP", "vip"), ("Staff", "staff")]))
                .with_layout(OptionLayout::Horizontal),
        ),
        FormControl::Checkbox(CheckboxGroup::new(
            confirmation,
            options(&[
                ("Confirm Persons Affected", "confirm"),
                ("Confirm Persons Affected1", "confirm1"),
                ("Confirm Persons Affected2", "confirm2"),
            ]),
        )),
    ])
}
