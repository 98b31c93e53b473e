pub mod class;
pub mod expr;
pub mod imports;

/// Path of a class's source file relative to the output root.
///
/// - `("com.example", "Point")` → `"com/example/Point.java"`
/// - `("", "Point")` → `"Point.java"`
pub fn source_path(package: &str, simple: &str) -> String {
    if package.is_empty() {
        format!("{simple}.java")
    } else {
        format!("{}/{simple}.java", package.replace('.', "/"))
    }
}
