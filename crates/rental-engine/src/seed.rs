//! # Demo Fleet
//!
//! The fleet the desk starts with when no other is supplied.
//!
//! Each entry has:
//! - Car id `C001`..`C010`
//! - A unique registration number
//! - A daily rate between $35.00 and $120.00

use rental_core::types::{FuelType, Transmission};
use rental_core::validation::ValidationResult;
use rental_core::{Money, NewCar};

use crate::fleet::FleetRegistry;

type Row = (
    &'static str, // car id
    &'static str, // brand
    &'static str, // model
    i64,          // price per day, cents
    FuelType,
    Transmission,
    u32,          // mileage, km
    &'static str, // vehicle type
    u8,           // seats
    &'static str, // color
    &'static str, // registration number
);

#[rustfmt::skip]
const DEMO_CARS: &[Row] = &[
    ("C001", "Toyota", "Corolla", 5000, FuelType::Petrol, Transmission::Automatic, 42_300, "Sedan", 5, "White", "KA-01-AB-1234"),
    ("C002", "Honda", "City", 4500, FuelType::Petrol, Transmission::Manual, 38_900, "Sedan", 5, "Silver", "KA-02-CD-5678"),
    ("C003", "Hyundai", "Creta", 6500, FuelType::Diesel, Transmission::Automatic, 27_150, "SUV", 5, "Black", "KA-03-EF-9012"),
    ("C004", "Maruti Suzuki", "Swift", 3500, FuelType::Petrol, Transmission::Manual, 55_800, "Hatchback", 5, "Red", "KA-04-GH-3456"),
    ("C005", "Tata", "Nexon EV", 7000, FuelType::Electric, Transmission::Automatic, 12_400, "SUV", 5, "Teal", "KA-05-IJ-7890"),
    ("C006", "Mahindra", "XUV700", 9000, FuelType::Diesel, Transmission::Automatic, 21_700, "SUV", 7, "Grey", "KA-06-KL-2345"),
    ("C007", "Toyota", "Innova Crysta", 8500, FuelType::Diesel, Transmission::Manual, 64_200, "MPV", 7, "Bronze", "KA-07-MN-6789"),
    ("C008", "Kia", "Carens", 6000, FuelType::Petrol, Transmission::Manual, 18_050, "MPV", 6, "Blue", "KA-08-OP-0123"),
    ("C009", "Maruti Suzuki", "Ertiga", 5500, FuelType::Cng, Transmission::Manual, 47_600, "MPV", 7, "White", "KA-09-QR-4567"),
    ("C010", "BMW", "330Li", 12000, FuelType::Hybrid, Transmission::Automatic, 9_300, "Luxury Sedan", 5, "Black", "KA-10-ST-8901"),
];

/// Fleet entries for the demo fleet, in display order.
pub fn demo_cars() -> Vec<NewCar> {
    DEMO_CARS
        .iter()
        .map(|&(id, brand, model, cents, fuel, gearbox, km, kind, seats, color, reg)| NewCar {
            car_id: id.to_string(),
            brand: brand.to_string(),
            model: model.to_string(),
            price_per_day: Money::from_cents(cents),
            fuel_type: fuel,
            transmission: gearbox,
            mileage: km,
            vehicle_type: kind.to_string(),
            seating_capacity: seats,
            color: color.to_string(),
            registration_number: reg.to_string(),
        })
        .collect()
}

/// The demo fleet, validated and loaded.
pub fn demo_fleet() -> ValidationResult<FleetRegistry> {
    FleetRegistry::load(demo_cars())
}
