/// Build a [`PlaceholderStore`](crate::PlaceholderStore) from `key => value`
/// pairs.
///
/// Keys are anything convertible into a `String`, values anything
/// convertible into a [`Value`](crate::Value). Later pairs win over earlier
/// ones with the same key.
///
/// # Examples
///
/// ```
/// use stencil::{placeholders, Delimiters, Scanner};
///
/// let store = placeholders! {
///     "name" => "Магда Нахман",
///     "age" => 42,
/// };
///
/// let delimiters = Delimiters::default();
/// assert_eq!(
///     Scanner::new(&delimiters).render("${name} (${age})", &store),
///     "Магда Нахман (42)",
/// );
/// ```
#[macro_export]
macro_rules! placeholders {
    () => {
        $crate::PlaceholderStore::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut store = $crate::PlaceholderStore::new();
        $(
            store.put($key, $value);
        )+
        store
    }};
}
