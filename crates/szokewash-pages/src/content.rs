//! Static site content

use szokewash_forms::ServiceType;

/// A service as presented on the services page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
	pub title: &'static str,
	pub description: &'static str,
	pub features: &'static [&'static str],
	pub price: &'static str,
	/// The bookable service this entry corresponds to
	pub service_type: ServiceType,
}

pub const SERVICES: &[ServiceInfo] = &[
	ServiceInfo {
		title: "Külső mosás és polírozás",
		description: "Professzionális külső tisztítás és polírozás a tökéletes fényért. Eltávolítjuk a szennyeződéseket, oxidációt és visszaadjuk autója eredeti ragyogását.",
		features: &[
			"Kézi mosás prémium termékekkel",
			"Felni és gumiabroncs tisztítás",
			"Polírozás és waxolás",
			"Üvegkezelés",
			"Gumik és műanyagok ápolása",
		],
		price: "Ártól: XX.XXX Ft",
		service_type: ServiceType::KulsoMosas,
	},
	ServiceInfo {
		title: "Belső takarítás",
		description: "Alapos belső tisztítás a legrejtettebb zugokig. Bőrápolás, szövetkárpit mélytisztítás és teljes szagtalanítás professzionális berendezésekkel.",
		features: &[
			"Porszívózás és portörlés",
			"Bőrülés tisztítás és ápolás",
			"Szövetkárpit mélytisztítás",
			"Műszerfal és konzol tisztítás",
			"Ózonos szagtalanítás",
		],
		price: "Ártól: XX.XXX Ft",
		service_type: ServiceType::BelsoTakaritas,
	},
	ServiceInfo {
		title: "Fényezésvédelem",
		description: "Hosszútávú védelem autója fényezésének. Kerámia bevonat, PPF fólia és egyéb védőrétegek a karcok, UV sugárzás és időjárás ellen.",
		features: &[
			"Kerámia bevonat",
			"PPF védőfólia",
			"Nano bevonat",
			"Karceltávolítás",
			"Fényezéskorrekció",
		],
		price: "Ártól: XX.XXX Ft",
		service_type: ServiceType::Fenyezesvedelem,
	},
];

/// One line of the contact details block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ContactDetail {
	pub label: &'static str,
	pub value: &'static str,
	/// Link target, for details that can be clicked
	pub href: Option<&'static str>,
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
	ContactDetail {
		label: "Telefon",
		value: "+36 XX XXX XXXX",
		href: Some("tel:+36XXXXXXXX"),
	},
	ContactDetail {
		label: "Email",
		value: "info@szokewash.hu",
		href: Some("mailto:info@szokewash.hu"),
	},
	ContactDetail {
		label: "Cím",
		value: "8500 Pápa, Úrdomb utca 12.",
		href: None,
	},
	ContactDetail {
		label: "Nyitvatartás",
		value: "H-P: 8:00 - 18:00, Szo: 9:00 - 14:00",
		href: None,
	},
];

/// Catalogue entry for a bookable service, if the services page lists it.
pub fn service_info(service_type: ServiceType) -> Option<&'static ServiceInfo> {
	SERVICES.iter().find(|s| s.service_type == service_type)
}
