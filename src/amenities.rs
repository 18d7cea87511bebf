use serde::{Deserialize, Serialize};

// Normalized amenity tags. Anything the provider reports outside this set is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Amenity {
    Wifi,
    Parking,
    Breakfast,
    Pool,
    Spa,
    Gym,
    Restaurant,
    RoomService,
    Bar,
    #[serde(rename = "ac")]
    Ac,
}

impl Amenity {
    // Provider facility name -> tag, case-insensitive
    pub fn from_facility_name(name: &str) -> Option<Self> {
        let amenity = match name.to_lowercase().as_str() {
            "wifi" => Amenity::Wifi,
            "parking" => Amenity::Parking,
            "breakfast" => Amenity::Breakfast,
            "pool" => Amenity::Pool,
            "spa" => Amenity::Spa,
            "fitness" => Amenity::Gym,
            "restaurant" => Amenity::Restaurant,
            "room_service" => Amenity::RoomService,
            "bar" => Amenity::Bar,
            "air_conditioning" => Amenity::Ac,
            _ => return None,
        };
        Some(amenity)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Amenity::Wifi => "wifi",
            Amenity::Parking => "parking",
            Amenity::Breakfast => "breakfast",
            Amenity::Pool => "pool",
            Amenity::Spa => "spa",
            Amenity::Gym => "gym",
            Amenity::Restaurant => "restaurant",
            Amenity::RoomService => "roomService",
            Amenity::Bar => "bar",
            Amenity::Ac => "ac",
        }
    }
}

impl std::fmt::Display for Amenity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Maps facility names in order, dropping the ones without a tag
pub fn map_facilities<'a, I>(names: I) -> Vec<Amenity>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .filter_map(Amenity::from_facility_name)
        .collect()
}
