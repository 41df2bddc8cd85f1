/// Build a [`Key`](crate::model::Key) from scalar expressions.
///
/// ```
/// use docstore::key;
/// let key = key![1, 1.0, "1"];
/// assert_eq!(key.arity(), 3);
/// ```
#[macro_export]
macro_rules! key {
    ($($value:expr),* $(,)?) => {
        $crate::model::Key::new(vec![$($crate::model::Value::from($value)),*])
    };
}

/// Build a [`Document`](crate::model::Document) from `column => value` pairs.
///
/// ```
/// use docstore::doc;
/// let document = doc! { "id" => 1, "v" => "a" };
/// assert_eq!(document.len(), 2);
/// ```
#[macro_export]
macro_rules! doc {
    ($($column:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut document = $crate::model::Document::new();
        $(document.insert($column, $value);)*
        document
    }};
}
