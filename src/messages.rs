//! User-facing texts

pub const CREATE_PENDING: &str = "Generando artículo…";
pub const CREATE_FAILED: &str = "Error al generar el artículo";
pub const LIST_EMPTY: &str = "No hay artículos guardados todavía.";
pub const LIST_FAILED: &str = "Error cargando artículos";
pub const UNTITLED: &str = "Sin título";
pub const INVALID_DATE: &str = "Invalid Date";
pub const OPEN_FAILED: &str = "No se pudo cargar el artículo";
pub const EDIT_SAVED: &str = "Cambios guardados correctamente";
pub const EDIT_PENDING: &str = "Guardando cambios…";
pub const EDIT_FAILED: &str = "No se pudo guardar el artículo";
pub const EDIT_NO_ARTICLE: &str = "Ningún artículo seleccionado";
pub const DELETE_CONFIRM: &str = "¿Seguro que quieres eliminar este artículo?";
pub const DELETE_FAILED: &str = "Error al eliminar";
pub const TEMPLATE_LOAD_FAILED: &str = "No se pudo cargar el template";
pub const TEMPLATE_PENDING: &str = "Guardando template…";
pub const TEMPLATE_SAVED: &str = "Template guardado correctamente";
pub const TEMPLATE_SAVE_FAILED: &str = "No se pudo guardar el template";

pub fn created(slug: &str) -> String {
    format!("Artículo creado correctamente. Slug: {}", slug)
}

pub fn error(message: &str) -> String {
    format!("Error: {}", message)
}

pub fn open_error(message: &str) -> String {
    format!("Error cargando artículo: {}", message)
}

pub fn save_error(message: &str) -> String {
    format!("Error guardando: {}", message)
}

pub fn delete_error(message: &str) -> String {
    format!("No se pudo eliminar: {}", message)
}

pub fn template_save_error(message: &str) -> String {
    format!("Error guardando template: {}", message)
}
