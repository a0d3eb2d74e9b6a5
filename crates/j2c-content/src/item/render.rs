//! Rendering records as `.items` declarations.

use super::ItemRecord;

impl ItemRecord {
    /// Render this record as one openHAB `.items` declaration line.
    ///
    /// ```text
    /// Group:Switch:OR(ON,OFF) gLights "All lights" <light> (gHome) ["Lighting"]
    /// ```
    ///
    /// Empty parts are left out.
    pub fn to_config_line(&self, name: &str) -> String {
        let mut parts = vec![self.type_declaration(), name.to_string()];

        if !self.label.is_empty() {
            parts.push(format!("\"{}\"", self.label.replace('"', "\\\"")));
        }
        if !self.category.is_empty() {
            parts.push(format!("<{}>", self.category));
        }
        if !self.group_names.is_empty() {
            parts.push(format!("({})", self.group_names.join(",")));
        }
        if !self.tags.is_empty() {
            let tags: Vec<_> = self.tags.iter().map(|t| format!("\"{t}\"")).collect();
            parts.push(format!("[{}]", tags.join(",")));
        }

        parts
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }

    fn type_declaration(&self) -> String {
        if self.item_type.eq_ignore_ascii_case("group") {
            let mut decl = self.item_type.clone();
            if !self.base_item_type.is_empty() {
                decl.push(':');
                decl.push_str(&self.base_item_type);
                if !self.function_name.is_empty() {
                    decl.push(':');
                    decl.push_str(&self.function_name);
                    if !self.function_params.is_empty() {
                        decl.push_str(&format!("({})", self.function_params.join(",")));
                    }
                }
            }
            return decl;
        }

        if !self.dimension.is_empty() && !self.item_type.contains(':') {
            return format!("{}:{}", self.item_type, self.dimension);
        }
        self.item_type.clone()
    }
}
