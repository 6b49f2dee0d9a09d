/// Renders logins or names as `{a,b,c}`, keeping iteration order.
pub fn format_list<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    format!("{{{}}}", items.into_iter().collect::<Vec<_>>().join(","))
}
