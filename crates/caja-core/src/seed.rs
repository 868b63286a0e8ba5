//! Fixed demonstration data set installed by the seeding guard.
//!
//! Every entry receives a freshly generated identifier at seed time; the
//! demonstration data carries none of its own.

use caja_domain::{ExpenseEntry, IncomeEntry};
use chrono::NaiveDate;

fn demo_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 4).expect("valid demo date")
}

pub fn demo_incomes() -> Vec<IncomeEntry> {
    let day = demo_day();
    vec![
        IncomeEntry::new(
            day,
            1985.0,
            "Facturación",
            "Facturación fin de 04/10",
            "Efectivo",
            true,
        ),
        IncomeEntry::new(day, 170.0, "Facturación", "Cambio inicial", "Efectivo", true)
            .with_float(170.0),
        IncomeEntry::new(day, 1944.0, "Lotería", "Papeletas", "Pendiente", false),
        IncomeEntry::new(day, 150.0, "Lotería", "Décimos", "Pendiente", false),
    ]
}

pub fn demo_expenses() -> Vec<ExpenseEntry> {
    let day = demo_day();
    vec![
        ExpenseEntry::new(day, "Proveedores", "Pedido Proveedor", 1120.0, "Pendiente").settled(),
        ExpenseEntry::new(day, "Uno de nosotros", "Chuches", 41.84, "Pendiente")
            .paid_by("Jesús")
            .settled(),
        ExpenseEntry::new(day, "Uno de nosotros", "Luces Fiestas", 100.0, "Pendiente")
            .paid_by("Luca")
            .settled(),
        ExpenseEntry::new(day, "Uno de nosotros", "Caja Registradora", 30.0, "Pendiente")
            .paid_by("Petit")
            .settled(),
        ExpenseEntry::new(day, "Uno de nosotros", "Bridas, cinta", 4.0, "Pendiente")
            .paid_by("Javi")
            .settled(),
        ExpenseEntry::new(day, "Cambio", "Cambio", 20.0, "Pendiente")
            .paid_by("Javi")
            .settled(),
        ExpenseEntry::new(day, "Carteles", "Carteles", 7.6, "Pendiente")
            .paid_by("Jesús")
            .settled(),
        ExpenseEntry::new(day, "Limpieza", "Gastos Limpieza", 8.92, "Pendiente")
            .paid_by("Jesús")
            .settled(),
        ExpenseEntry::new(day, "Cambio", "Cambio", 150.0, "Pendiente")
            .paid_by("Jesús")
            .settled(),
        ExpenseEntry::new(day, "Hielo", "Hielos", 25.0, "Pendiente")
            .paid_by("Jesús")
            .settled(),
    ]
}
