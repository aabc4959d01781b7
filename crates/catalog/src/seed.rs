//! Built-in catalog contents, in seed order.

use crate::records::{Book, Music};

/// Default book collection
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new("01", "Hirano to Kagiura", "Shō Harusono", 169.00),
        Book::new("02", "Kimetsu no Yaiba", "Koyoharu Gotouge", 66.50),
        Book::new("03", "Sasaki to Miyano", "Shō Harusono", 185.00),
        Book::new("04", "One Piece", "Oda Eiichirō", 85.00),
        Book::new("05", "Jujutsu Kaisen", "Gege Akutami", 80.00),
    ]
}

/// Default music collection
pub fn seed_musics() -> Vec<Music> {
    vec![
        Music::new("01", "How It's Done", "HUNTR/X"),
        Music::new("02", "三原色 (Sangenshoku)", "YOASOBI"),
        Music::new("03", "소용돌이(To you)", "SEVENTEEN"),
        Music::new("04", "Golden", "HUNTR/X"),
        Music::new("05", "Young And Beautiful", "Lana Del Rey"),
    ]
}
