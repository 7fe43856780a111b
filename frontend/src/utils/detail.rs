/// How a detail value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStyle {
    Plain,
    Mono,
    Block,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
    pub style: FieldStyle,
}

/// Ordered field list for a detail view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailFields {
    fields: Vec<DetailField>,
}

impl DetailFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always rendered; absent or blank values show as `-`.
    pub fn always(mut self, label: &'static str, value: Option<&str>, style: FieldStyle) -> Self {
        let value = value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or("-");
        self.fields.push(DetailField {
            label,
            value: value.to_string(),
            style,
        });
        self
    }

    /// Omitted entirely when absent or blank.
    pub fn optional(mut self, label: &'static str, value: Option<&str>, style: FieldStyle) -> Self {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.fields.push(DetailField {
                label,
                value: value.to_string(),
                style,
            });
        }
        self
    }

    pub fn get(&self, label: &str) -> Option<&DetailField> {
        self.fields.iter().find(|f| f.label == label)
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.label).collect()
    }

    pub fn into_vec(self) -> Vec<DetailField> {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_fields_render_placeholder() {
        let fields = DetailFields::new()
            .always("사용자", None, FieldStyle::Plain)
            .always("IP 주소", Some(" "), FieldStyle::Mono);
        assert_eq!(fields.get("사용자").map(|f| f.value.as_str()), Some("-"));
        assert_eq!(fields.get("IP 주소").map(|f| f.value.as_str()), Some("-"));
    }

    #[test]
    fn optional_fields_are_dropped_when_empty() {
        let fields = DetailFields::new()
            .optional("문서 ID", Some(""), FieldStyle::Mono)
            .optional("사용자 에이전트", None, FieldStyle::Mono)
            .optional("에러 메시지", Some("timeout"), FieldStyle::Error);
        assert_eq!(fields.labels(), vec!["에러 메시지"]);
    }
}
