mod comparison;
mod inventory;
