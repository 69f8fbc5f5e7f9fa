/// Default namespace prefixed to every storage key
pub const DEFAULT_NAMESPACE: &str = "dairytrack";

/// Storage key suffix for the customer roster
pub const CUSTOMERS_KEY_SUFFIX: &str = "customers";

/// Storage key suffix for the expense records
pub const EXPENSES_KEY_SUFFIX: &str = "expenses";

/// Storage key suffix for the theme preference
pub const THEME_KEY_SUFFIX: &str = "theme";

/// Minimum number of characters in a customer name
pub const MIN_CUSTOMER_NAME_LEN: usize = 2;

/// Number of years (current included) selectable when recording an expense
pub const EXPENSE_YEAR_WINDOW: i32 = 5;

/// Decimal places kept on stored bill amounts
pub const AMOUNT_DECIMAL_PLACES: u32 = 2;
