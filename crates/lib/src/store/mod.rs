mod errors;
pub use errors::StoreError;

mod table;
pub use table::Table;

/// A row type that exposes its attribute column as text.
///
/// This is the boundary between a host record and its attribute map: the
/// record stores canonical attribute text in an ordinary field, and a
/// [`Table`] parses that text on load and writes it back on save. The map
/// type itself never appears in the stored representation, so any row shape
/// works as long as one text column is set aside for attributes.
///
/// ```
/// use anexo::Attributed;
///
/// #[derive(Clone, serde::Serialize, serde::Deserialize)]
/// struct Product {
///     nombre: String,
///     atributos: String,
/// }
///
/// impl Attributed for Product {
///     fn attrs_text(&self) -> &str {
///         &self.atributos
///     }
///
///     fn set_attrs_text(&mut self, text: String) {
///         self.atributos = text;
///     }
/// }
/// ```
pub trait Attributed {
    /// Returns the record's stored attribute text.
    fn attrs_text(&self) -> &str;

    /// Replaces the record's stored attribute text.
    fn set_attrs_text(&mut self, text: String);
}
