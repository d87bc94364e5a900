pub mod implementors;
pub mod traits;

use diesel::sql_types::{Bigint, Unsigned};

diesel::define_sql_function! {
    /// MySQL's LAST_INSERT_ID(), used to read back auto-increment keys
    /// inside the same transaction as the insert.
    fn last_insert_id() -> Unsigned<Bigint>;
}
