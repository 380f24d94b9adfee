use actix_web::{web, HttpResponse};

use super::AppState;
use crate::error::ApiError;
use crate::models::InventoryRecord;

// ============================================================================
// Report Handlers - CSV export
// ============================================================================

/// GET /api/reports/inventory - full inventory as a CSV attachment.
pub async fn inventory_report(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let rows = sqlx::query_as::<_, InventoryRecord>(
        "SELECT inventory_id, product_id, warehouse, quantity FROM inventory ORDER BY inventory_id",
    )
    .fetch_all(&state.pool)
    .await
    .map_err(|e| ApiError::internal("Failed to generate report", e))?;

    let csv = render_inventory_csv(&rows)
        .map_err(|e| ApiError::internal("Failed to generate report", e))?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"inventory_report.csv\"",
        ))
        .body(csv))
}

fn render_inventory_csv(rows: &[InventoryRecord]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("csv buffer flush failed: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}
