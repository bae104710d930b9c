pub mod dto;
pub mod reminder_service;

#[cfg(test)]
mod reminder_service_test;
