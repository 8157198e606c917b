//! The fixed seed set inserted into an empty catalog.

use crate::car::NewCar;

/// (brand, model, body type, price, power, description)
type SeedRow = (&'static str, &'static str, &'static str, u64, u32, &'static str);

const SEED: &[SeedRow] = &[
    // Economy
    ("Toyota", "Corolla", "Седан", 1_500_000, 122, "Надежный седан с отличной экономичностью"),
    ("Toyota", "Camry", "Седан", 2_500_000, 181, "Комфортный бизнес-седан"),
    ("Toyota", "RAV4", "Внедорожник", 3_000_000, 203, "Популярный кроссовер"),
    ("Honda", "Civic", "Седан", 1_600_000, 143, "Спортивный седан с отличной динамикой"),
    ("Honda", "CR-V", "Внедорожник", 2_800_000, 190, "Надежный кроссовер"),
    ("Honda", "Accord", "Седан", 2_400_000, 192, "Просторный седан"),
    ("Nissan", "Sentra", "Седан", 1_400_000, 130, "Доступный седан"),
    ("Nissan", "Altima", "Седан", 2_300_000, 188, "Стильный седан среднего класса"),
    ("Nissan", "Rogue", "Внедорожник", 2_700_000, 181, "Семейный кроссовер"),
    ("Mazda", "Mazda3", "Седан", 1_700_000, 155, "Динамичный седан с отличной управляемостью"),
    ("Mazda", "CX-5", "Внедорожник", 2_900_000, 194, "Стильный кроссовер"),
    ("Hyundai", "Elantra", "Седан", 1_450_000, 147, "Современный седан"),
    ("Hyundai", "Sonata", "Седан", 2_200_000, 180, "Просторный седан"),
    ("Hyundai", "Tucson", "Внедорожник", 2_600_000, 177, "Практичный кроссовер"),
    ("Kia", "Rio", "Седан", 1_300_000, 123, "Бюджетный седан"),
    ("Kia", "Optima", "Седан", 2_100_000, 185, "Стильный седан"),
    ("Kia", "Sportage", "Внедорожник", 2_500_000, 177, "Компактный кроссовер"),

    // Mid-range
    ("Volkswagen", "Jetta", "Седан", 1_800_000, 150, "Немецкое качество"),
    ("Volkswagen", "Passat", "Седан", 2_700_000, 220, "Премиальный седан"),
    ("Volkswagen", "Tiguan", "Внедорожник", 3_100_000, 220, "Премиальный кроссовер"),
    ("Skoda", "Octavia", "Седан", 1_900_000, 150, "Практичный седан"),
    ("Skoda", "Superb", "Седан", 2_800_000, 220, "Просторный седан"),
    ("Skoda", "Kodiaq", "Внедорожник", 3_200_000, 245, "Семейный кроссовер"),
    ("Ford", "Focus", "Хэтчбек", 1_600_000, 150, "Динамичный хэтчбек"),
    ("Ford", "Fusion", "Седан", 2_300_000, 181, "Американский седан"),
    ("Ford", "Explorer", "Внедорожник", 3_500_000, 300, "Большой внедорожник"),
    ("Chevrolet", "Cruze", "Седан", 1_500_000, 154, "Доступный седан"),
    ("Chevrolet", "Malibu", "Седан", 2_400_000, 163, "Просторный седан"),
    ("Chevrolet", "Equinox", "Внедорожник", 3_000_000, 252, "Семейный кроссовер"),

    // Premium
    ("Mercedes-Benz", "C-Class", "Седан", 3_500_000, 204, "Премиальный седан"),
    ("Mercedes-Benz", "E-Class", "Седан", 5_000_000, 245, "Бизнес-класс"),
    ("Mercedes-Benz", "GLC", "Внедорожник", 4_800_000, 211, "Премиальный кроссовер"),
    ("BMW", "3 Series", "Седан", 3_600_000, 184, "Спортивный седан"),
    ("BMW", "5 Series", "Седан", 5_200_000, 249, "Премиальный седан"),
    ("BMW", "X3", "Внедорожник", 4_900_000, 184, "Спортивный кроссовер"),
    ("Audi", "A4", "Седан", 3_400_000, 190, "Премиальный седан"),
    ("Audi", "A6", "Седан", 5_100_000, 245, "Бизнес-класс"),
    ("Audi", "Q5", "Внедорожник", 4_700_000, 252, "Премиальный кроссовер"),
    ("Lexus", "ES", "Седан", 3_700_000, 215, "Японская надежность"),
    ("Lexus", "RX", "Внедорожник", 5_000_000, 295, "Премиальный кроссовер"),
    ("Infiniti", "Q50", "Седан", 3_300_000, 208, "Спортивный седан"),
    ("Infiniti", "QX50", "Внедорожник", 4_500_000, 268, "Премиальный кроссовер"),

    // Sporty
    ("Subaru", "WRX", "Седан", 2_800_000, 268, "Спортивный седан с полным приводом"),
    ("Subaru", "Forester", "Внедорожник", 2_700_000, 182, "Надежный кроссовер"),
    ("Mitsubishi", "Lancer", "Седан", 1_600_000, 148, "Доступный седан"),
    ("Mitsubishi", "Outlander", "Внедорожник", 2_400_000, 166, "Практичный кроссовер"),

    // More mainstream models
    ("Toyota", "Prius", "Хэтчбек", 2_200_000, 122, "Гибридный автомобиль"),
    ("Toyota", "Highlander", "Внедорожник", 3_800_000, 295, "Большой кроссовер"),
    ("Toyota", "4Runner", "Внедорожник", 4_000_000, 270, "Внедорожник"),
    ("Honda", "Pilot", "Внедорожник", 3_600_000, 280, "Семейный внедорожник"),
    ("Honda", "Ridgeline", "Пикап", 3_500_000, 280, "Пикап"),
    ("Nissan", "Pathfinder", "Внедорожник", 3_400_000, 284, "Большой кроссовер"),
    ("Nissan", "Frontier", "Пикап", 2_800_000, 152, "Пикап"),
    ("Mazda", "CX-9", "Внедорожник", 3_800_000, 250, "Большой кроссовер"),
    ("Mazda", "CX-30", "Внедорожник", 2_200_000, 186, "Компактный кроссовер"),
    ("Hyundai", "Palisade", "Внедорожник", 4_200_000, 291, "Большой кроссовер"),
    ("Hyundai", "Santa Fe", "Внедорожник", 3_200_000, 235, "Средний кроссовер"),
    ("Kia", "Sorento", "Внедорожник", 3_200_000, 191, "Семейный кроссовер"),
    ("Kia", "Telluride", "Внедорожник", 4_100_000, 291, "Большой кроссовер"),
    ("Volkswagen", "Atlas", "Внедорожник", 3_800_000, 276, "Большой кроссовер"),
    ("Volkswagen", "Arteon", "Седан", 3_200_000, 268, "Спортивный седан"),
    ("Skoda", "Kamiq", "Внедорожник", 1_800_000, 110, "Компактный кроссовер"),
    ("Ford", "Edge", "Внедорожник", 3_100_000, 250, "Средний кроссовер"),
    ("Ford", "Mustang", "Купе", 3_500_000, 450, "Спортивное купе"),
    ("Chevrolet", "Traverse", "Внедорожник", 3_600_000, 310, "Большой кроссовер"),
    ("Chevrolet", "Tahoe", "Внедорожник", 5_500_000, 355, "Большой внедорожник"),

    // Flagships
    ("Mercedes-Benz", "GLE", "Внедорожник", 6_500_000, 362, "Премиальный внедорожник"),
    ("Mercedes-Benz", "S-Class", "Седан", 12_000_000, 429, "Флагманский седан"),
    ("BMW", "X5", "Внедорожник", 6_500_000, 340, "Премиальный внедорожник"),
    ("BMW", "7 Series", "Седан", 11_000_000, 340, "Флагманский седан"),
    ("Audi", "Q7", "Внедорожник", 6_300_000, 333, "Премиальный внедорожник"),
    ("Audi", "A8", "Седан", 10_000_000, 340, "Флагманский седан"),
    ("Lexus", "LS", "Седан", 8_500_000, 416, "Флагманский седан"),
    ("Lexus", "LX", "Внедорожник", 9_000_000, 409, "Люксовый внедорожник"),
    ("Infiniti", "QX80", "Внедорожник", 7_500_000, 400, "Большой внедорожник"),

    // More brands
    ("Volvo", "S60", "Седан", 3_200_000, 250, "Безопасный седан"),
    ("Volvo", "XC60", "Внедорожник", 4_200_000, 250, "Безопасный кроссовер"),
    ("Volvo", "XC90", "Внедорожник", 5_500_000, 316, "Большой кроссовер"),
    ("Jaguar", "XE", "Седан", 3_500_000, 250, "Британский седан"),
    ("Jaguar", "F-Pace", "Внедорожник", 4_800_000, 340, "Спортивный кроссовер"),
    ("Land Rover", "Discovery", "Внедорожник", 5_200_000, 300, "Внедорожник"),
    ("Land Rover", "Range Rover", "Внедорожник", 12_000_000, 557, "Люксовый внедорожник"),

    // Budget
    ("Lada", "Granta", "Седан", 600_000, 90, "Бюджетный седан"),
    ("Lada", "Vesta", "Седан", 900_000, 106, "Популярный седан"),
    ("Lada", "XRAY", "Внедорожник", 1_100_000, 106, "Компактный кроссовер"),
    ("Renault", "Logan", "Седан", 700_000, 82, "Доступный седан"),
    ("Renault", "Duster", "Внедорожник", 1_300_000, 114, "Доступный кроссовер"),
    ("Renault", "Koleos", "Внедорожник", 2_000_000, 171, "Средний кроссовер"),
    ("Peugeot", "308", "Хэтчбек", 1_400_000, 130, "Французский хэтчбек"),
    ("Peugeot", "3008", "Внедорожник", 2_200_000, 165, "Стильный кроссовер"),
    ("Citroen", "C4", "Хэтчбек", 1_300_000, 110, "Компактный хэтчбек"),
    ("Citroen", "C5 Aircross", "Внедорожник", 2_100_000, 180, "Комфортный кроссовер"),

    // Compact and entry-level
    ("Toyota", "Yaris", "Хэтчбек", 1_200_000, 109, "Компактный хэтчбек"),
    ("Toyota", "C-HR", "Внедорожник", 2_300_000, 122, "Стильный кроссовер"),
    ("Honda", "Fit", "Хэтчбек", 1_100_000, 130, "Компактный хэтчбек"),
    ("Honda", "HR-V", "Внедорожник", 2_100_000, 141, "Компактный кроссовер"),
    ("Nissan", "Versa", "Седан", 1_000_000, 122, "Доступный седан"),
    ("Nissan", "Kicks", "Внедорожник", 1_500_000, 122, "Компактный кроссовер"),
    ("Mazda", "CX-3", "Внедорожник", 1_800_000, 148, "Маленький кроссовер"),
    ("Hyundai", "Accent", "Седан", 950_000, 120, "Бюджетный седан"),
    ("Hyundai", "Kona", "Внедорожник", 1_800_000, 147, "Компактный кроссовер"),
    ("Kia", "Forte", "Седан", 1_200_000, 147, "Доступный седан"),
    ("Kia", "Seltos", "Внедорожник", 1_700_000, 147, "Компактный кроссовер"),
    ("Ford", "Fiesta", "Хэтчбек", 1_000_000, 120, "Компактный хэтчбек"),
    ("Ford", "Escape", "Внедорожник", 2_600_000, 250, "Средний кроссовер"),
    ("Chevrolet", "Trax", "Внедорожник", 1_400_000, 155, "Компактный кроссовер"),
    ("Chevrolet", "Blazer", "Внедорожник", 3_200_000, 308, "Средний кроссовер"),
];

/// Number of cars in the seed set.
pub const SEED_SIZE: usize = SEED.len();

/// The seed set, in insertion order.
pub fn seed_cars() -> Vec<NewCar> {
    SEED.iter()
        .map(|&(brand, model, body_type, price, power, description)| {
            NewCar::new(brand, model, body_type, price, power).with_description(description)
        })
        .collect()
}
