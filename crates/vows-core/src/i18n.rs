//! Bilingual string lookup.
//!
//! A pure function over two static key/value tables, English and Malay.
//! Missing keys fall back to the key itself so a typo degrades visibly
//! instead of panicking. The default locale is Malay, matching the site.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Locale ──────────────────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
  En,
  #[default]
  Ms,
}

impl Locale {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::En => "en",
      Self::Ms => "ms",
    }
  }
}

impl FromStr for Locale {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "en" => Ok(Self::En),
      "ms" => Ok(Self::Ms),
      other => Err(Error::UnknownLocale(other.to_string())),
    }
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Lookup ──────────────────────────────────────────────────────────────────

/// Look up `key` in the table for `locale`; unknown keys come back as-is.
pub fn translate<'a>(locale: Locale, key: &'a str) -> &'a str {
  strings(locale)
    .iter()
    .find(|(k, _)| *k == key)
    .map(|(_, v)| *v)
    .unwrap_or(key)
}

/// The full key/value table for `locale`, for client-side hydration.
pub fn strings(locale: Locale) -> &'static [(&'static str, &'static str)] {
  match locale {
    Locale::En => EN,
    Locale::Ms => MS,
  }
}

// ─── Tables ──────────────────────────────────────────────────────────────────

const EN: &[(&str, &str)] = &[
  ("common.close", "Close"),
  ("common.error", "Error"),
  ("common.loading", "Loading..."),
  ("common.optional", "Optional"),
  ("common.required", "Required"),
  ("details.ceremony.title", "Wedding Ceremony"),
  ("details.location.title", "Wedding Location"),
  (
    "details.subtitle",
    "All the essential information to help you plan your visit and celebrate with us.",
  ),
  ("details.title", "Wedding Details"),
  ("footer.couple", "Husni & Ellisya"),
  ("footer.date", "November 9, 2025"),
  ("footer.tagline", "Two hearts, one love, forever together"),
  ("hero.countdown.days", "Days"),
  ("hero.countdown.hours", "Hours"),
  ("hero.countdown.minutes", "Minutes"),
  ("hero.countdown.seconds", "Seconds"),
  ("hero.date", "November 9, 2025"),
  ("hero.rsvp_now", "RSVP Now"),
  ("hero.save_date", "📅 Save the date!"),
  ("hero.venue", "Dar Al Fatiah Homestay"),
  ("messages.cta.title", "Leave Your Well Wishes!"),
  ("messages.error", "Oops!"),
  ("messages.loading", "Loading messages..."),
  (
    "messages.no_messages.description",
    "Be the first to share your beautiful wishes and blessings for Husni & Ellisya!",
  ),
  ("messages.no_messages.title", "Your Love & Wishes Await"),
  (
    "messages.subtitle",
    "Your heartfelt wishes and messages mean the world to us",
  ),
  ("messages.swipe_hint", "Swipe left or right to see more messages"),
  ("messages.title", "Messages from Our Loved Ones"),
  ("nav.details", "Details"),
  ("nav.gallery", "Gallery"),
  ("nav.home", "Home"),
  ("nav.rsvp", "RSVP"),
  ("nav.video", "Video"),
  ("rsvp.attendance.label", "Will you be attending?"),
  ("rsvp.attendance.no", "No, I can't make it."),
  ("rsvp.attendance.yes", "Yes, I'll be there!"),
  ("rsvp.contact", "Questions? Contact us at"),
  ("rsvp.guests.label", "Number of Guests (including yourself)"),
  ("rsvp.message.label", "Message for the Couple (Optional)"),
  (
    "rsvp.message.placeholder",
    "Share your well wishes or a special memory...",
  ),
  ("rsvp.name.label", "Name"),
  ("rsvp.name.placeholder", "Your name"),
  ("rsvp.submit", "Send RSVP"),
  ("rsvp.submitting", "Submitting..."),
  (
    "rsvp.subtitle",
    "We can't wait to celebrate with you! Please let us know if you'll be joining us for our special day by filling out the form below.",
  ),
  ("rsvp.success.another", "Submit Another RSVP"),
  (
    "rsvp.success.message",
    "We've received your response and look forward to celebrating with you.",
  ),
  ("rsvp.success.title", "Thank You for Your RSVP!"),
  ("rsvp.title", "RSVP"),
];

const MS: &[(&str, &str)] = &[
  ("common.close", "Tutup"),
  ("common.error", "Ralat"),
  ("common.loading", "Memuatkan..."),
  ("common.optional", "Pilihan"),
  ("common.required", "Diperlukan"),
  ("details.ceremony.title", "Majlis Perkahwinan"),
  ("details.location.title", "Lokasi Perkahwinan"),
  (
    "details.subtitle",
    "Semua maklumat penting untuk membantu anda merancang kunjungan dan meraikan bersama kami.",
  ),
  ("details.title", "Butiran Perkahwinan"),
  ("footer.couple", "Husni & Ellisya"),
  ("footer.date", "9 November 2025"),
  ("footer.tagline", "Dua hati, satu cinta, bersama selamanya"),
  ("hero.countdown.days", "Hari"),
  ("hero.countdown.hours", "Jam"),
  ("hero.countdown.minutes", "Minit"),
  ("hero.countdown.seconds", "Saat"),
  ("hero.date", "9 November 2025"),
  ("hero.rsvp_now", "RSVP Sekarang"),
  ("hero.save_date", "📅 Simpan tarikh ini!"),
  ("hero.venue", "Dar Al Fatiah Homestay"),
  ("messages.cta.title", "Tinggalkan Ucapan Baik Anda!"),
  ("messages.error", "Ops!"),
  ("messages.loading", "Memuatkan mesej..."),
  (
    "messages.no_messages.description",
    "Jadilah yang pertama berkongsi ucapan indah dan doa restu untuk Husni & Ellisya!",
  ),
  ("messages.no_messages.title", "Kasih Sayang & Doa Anda Dinanti"),
  (
    "messages.subtitle",
    "Ucapan ikhlas dan mesej anda sangat bermakna bagi kami",
  ),
  (
    "messages.swipe_hint",
    "Leret ke kiri atau kanan untuk melihat lebih banyak mesej",
  ),
  ("messages.title", "Mesej Daripada Orang Tersayang"),
  ("nav.details", "Butiran"),
  ("nav.gallery", "Galeri"),
  ("nav.home", "Utama"),
  ("nav.rsvp", "RSVP"),
  ("nav.video", "Video"),
  ("rsvp.attendance.label", "Adakah anda akan hadir?"),
  ("rsvp.attendance.no", "Tidak, saya tidak dapat hadir."),
  ("rsvp.attendance.yes", "Ya, saya akan hadir!"),
  ("rsvp.contact", "Soalan? Hubungi kami di"),
  ("rsvp.guests.label", "Bilangan Tetamu (termasuk diri anda)"),
  ("rsvp.message.label", "Mesej untuk Pasangan (Pilihan)"),
  (
    "rsvp.message.placeholder",
    "Kongsi ucapan baik atau kenangan istimewa...",
  ),
  ("rsvp.name.label", "Nama"),
  ("rsvp.name.placeholder", "Nama anda"),
  ("rsvp.submit", "Hantar RSVP"),
  ("rsvp.submitting", "Menghantar..."),
  (
    "rsvp.subtitle",
    "Kami tidak sabar untuk meraikan bersama anda! Sila beritahu kami jika anda akan menyertai kami untuk hari istimewa kami dengan mengisi borang di bawah.",
  ),
  ("rsvp.success.another", "Hantar RSVP Lain"),
  (
    "rsvp.success.message",
    "Kami telah menerima respons anda dan tidak sabar untuk meraikan bersama anda.",
  ),
  ("rsvp.success.title", "Terima Kasih atas RSVP Anda!"),
  ("rsvp.title", "RSVP"),
];

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_key_translates_in_both_locales() {
    assert_eq!(translate(Locale::En, "rsvp.submit"), "Send RSVP");
    assert_eq!(translate(Locale::Ms, "rsvp.submit"), "Hantar RSVP");
  }

  #[test]
  fn missing_key_falls_back_to_the_key_itself() {
    assert_eq!(translate(Locale::En, "no.such.key"), "no.such.key");
    assert_eq!(translate(Locale::Ms, "no.such.key"), "no.such.key");
  }

  #[test]
  fn default_locale_is_malay() {
    assert_eq!(Locale::default(), Locale::Ms);
  }

  #[test]
  fn locale_parses_and_rejects() {
    assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
    assert_eq!("ms".parse::<Locale>().unwrap(), Locale::Ms);
    assert!("fr".parse::<Locale>().is_err());
  }

  #[test]
  fn tables_cover_the_same_keys() {
    let en_keys: Vec<_> = EN.iter().map(|(k, _)| *k).collect();
    let ms_keys: Vec<_> = MS.iter().map(|(k, _)| *k).collect();
    assert_eq!(en_keys, ms_keys);
  }

  #[test]
  fn keys_are_unique() {
    let mut keys: Vec<_> = EN.iter().map(|(k, _)| *k).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), EN.len());
  }
}
