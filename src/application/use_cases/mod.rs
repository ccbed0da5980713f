/// Use cases module containing application business logic orchestration
mod refresh_prices;

pub use refresh_prices::RefreshPricesUseCase;
