use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SaleError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfig = 3,
    Unauthorized = 4,
    InvalidAmount = 5,
    /// Outside `[start_date, end_date)` or hard cap already reached.
    SaleNotActive = 6,
    BelowMinimumPurchase = 7,
    /// Allotment exhausted or the token ledger rejected the transfer.
    LedgerTransferFailed = 8,
    PaymentFailed = 9,
    ArithmeticOverflow = 10,
}
