//! Actions Table Component
//!
//! Read-only table over one page of action records.

use chrono::{DateTime, NaiveDateTime};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::ActionItem;

/// Shown when an icon URL fails to load.
const ICON_FALLBACK: &str = "https://via.placeholder.com/40";

#[component]
pub fn ActionsTable(items: Vec<ActionItem>) -> impl IntoView {
    view! {
        <div class="table-wrap">
            <table class="actions-table">
                <thead>
                    <tr>
                        <th>"Icono"</th>
                        <th>"Nombre"</th>
                        <th>"Descripción"</th>
                        <th>"Estado"</th>
                        <th>"Color"</th>
                        <th>"Fecha"</th>
                    </tr>
                </thead>
                <tbody>
                    {items.into_iter().map(|action| {
                        let active = action.status == 1;
                        view! {
                            <tr>
                                <td>
                                    <img
                                        class="action-icon"
                                        src=action.icon.clone()
                                        alt=action.name.clone()
                                        on:error=move |ev| {
                                            let target = ev.target()
                                                .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok());
                                            if let Some(img) = target {
                                                img.set_src(ICON_FALLBACK);
                                            }
                                        }
                                    />
                                </td>
                                <td class="action-name">{action.name.clone()}</td>
                                <td class="action-description" title=action.description.clone()>
                                    {action.description.clone()}
                                </td>
                                <td>
                                    <span class=if active { "status-badge active" } else { "status-badge" }>
                                        {if active { "Activo" } else { "Inactivo" }}
                                    </span>
                                </td>
                                <td>
                                    <div class="color-cell">
                                        <span class="color-swatch" style:background-color=action.color.clone()></span>
                                        <span class="color-code">{action.color.to_uppercase()}</span>
                                    </div>
                                </td>
                                <td class="action-date">{format_created_at(&action.created_at)}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

/// `createdAt` is ISO-8601, with or without an offset; unparseable input is
/// shown as-is.
fn format_created_at(iso: &str) -> String {
    if let Ok(date) = DateTime::parse_from_rfc3339(iso) {
        return date.format("%d/%m/%Y").to_string();
    }
    if let Ok(date) = NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f") {
        return date.format("%d/%m/%Y").to_string();
    }
    iso.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_timestamps_with_offset() {
        assert_eq!(format_created_at("2025-03-14T09:26:53Z"), "14/03/2025");
        assert_eq!(format_created_at("2024-01-02T00:00:00+02:00"), "02/01/2024");
    }

    #[test]
    fn formats_timestamps_without_offset() {
        assert_eq!(format_created_at("2025-03-14T09:26:53"), "14/03/2025");
        assert_eq!(format_created_at("2025-03-14T09:26:53.1234567"), "14/03/2025");
    }

    #[test]
    fn keeps_unparseable_input() {
        assert_eq!(format_created_at("hace un rato"), "hace un rato");
    }
}
