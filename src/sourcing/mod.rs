/// Sourcing module containing domain models and services
///
/// This module contains the core business logic for resolving
/// component prices and stock, organized following DDD principles:
///
/// - `domain`: Pure domain models (components, price tiers, vendor results)
/// - `services`: Domain services (normalization, tier selection, aggregation)
pub mod domain;
pub mod services;
