use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputType {
    /// Whole numbers such as the year
    Numeric,
    /// Plain text input with a numeric keypad hint; the value is never coerced
    Decimal,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Numeric | InputType::Decimal => "text",
        }
    }

    pub fn input_mode(&self) -> &'static str {
        match self {
            InputType::Numeric => "numeric",
            InputType::Decimal => "decimal",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FieldInputProps {
    pub id: String,
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn FieldInput(props: FieldInputProps) -> Element {
    rsx! {
        input {
            id: "{props.id}",
            name: "{props.id}",
            class: "input-field",
            r#type: "{props.input_type.as_str()}",
            inputmode: "{props.input_type.input_mode()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}
