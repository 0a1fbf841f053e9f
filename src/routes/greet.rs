use axum::extract::Query;

/// Greets whoever is named in the query string, or the world.
///
/// Repeated `name` parameters are joined with commas.
pub async fn handler(Query(params): Query<Vec<(String, String)>>) -> String {
    let names: Vec<&str> = params
        .iter()
        .filter(|(key, _)| key == "name")
        .map(|(_, value)| value.as_str())
        .collect();

    greeting(&names)
}

fn greeting(names: &[&str]) -> String {
    if names.is_empty() {
        "Hello World!".to_string()
    } else {
        format!("Hello {}!", names.join(","))
    }
}
