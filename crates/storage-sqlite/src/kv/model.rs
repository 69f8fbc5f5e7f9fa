//! Database model for key-value items.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// One row of the `kv_store` table. The value is the raw JSON text.
#[derive(Queryable, Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::kv_store)]
#[serde(rename_all = "camelCase")]
pub struct KvItemDB {
    pub item_key: String,
    pub item_value: String,
}
