//! Sort handler: order rows by a single column, ascending by default.

use tabex_core::types::{scalar_cmp, Table};
use tabex_plan::params::SortParams;

pub fn apply(table: &Table, params: &SortParams) -> Table {
    let Some(by) = &params.by else {
        return table.clone();
    };
    let Some(col) = table.column(by) else {
        return table.clone();
    };

    let mut indices: Vec<usize> = (0..table.num_rows()).collect();
    indices.sort_by(|&a, &b| {
        let ord = scalar_cmp(&col.values[a], &col.values[b]);
        if params.ascending {
            ord
        } else {
            ord.reverse()
        }
    });
    table.take(&indices)
}
