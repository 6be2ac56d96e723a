//! The national seed network: 25 cities, 35 undirected roads.

use std::io::Cursor;

use pn_network::{CityGraph, NetworkResult, load_network_reader};

const CITIES_CSV: &str = "\
city,zone
Lahore,Zone A
Islamabad,Zone B
Karachi,Zone C
Peshawar,Zone B
Multan,Zone A
Faisalabad,Zone A
Quetta,Zone D
Rawalpindi,Zone B
Sukkur,Zone C
Sargodha,Zone A
Bahawalpur,Zone D
Gujranwala,Zone A
Sahiwal,Zone A
Okara,Zone B
Mandi Bahauddin,Zone C
Rahim Yar Khan,Zone D
Hafizabad,Zone A
Sialkot,Zone A
Gujrat,Zone A
Vehari,Zone D
Gojra,Zone A
Mardan,Zone B
Swabi,Zone B
Gwadar,Zone D
Hyderabad,Zone C
";

const ROADS_CSV: &str = "\
from,to,distance_km,capacity
Lahore,Islamabad,375,20
Lahore,Faisalabad,180,18
Lahore,Multan,345,15
Lahore,Gujranwala,70,15
Lahore,Sahiwal,175,12
Lahore,Okara,100,10
Islamabad,Peshawar,155,18
Islamabad,Rawalpindi,20,25
Faisalabad,Sargodha,85,15
Faisalabad,Gojra,30,10
Faisalabad,Multan,240,15
Multan,Bahawalpur,90,12
Multan,Vehari,70,10
Multan,Sukkur,490,15
Sukkur,Karachi,470,18
Sukkur,Hyderabad,320,15
Sukkur,Quetta,390,12
Karachi,Hyderabad,165,20
Karachi,Gwadar,700,10
Quetta,Gwadar,700,10
Peshawar,Mardan,50,15
Peshawar,Swabi,70,12
Mardan,Swabi,40,12
Gujranwala,Sialkot,50,15
Gujranwala,Gujrat,40,15
Gujranwala,Hafizabad,50,12
Sialkot,Gujrat,60,12
Sargodha,Mandi Bahauddin,110,12
Bahawalpur,Rahim Yar Khan,80,12
Sahiwal,Okara,50,12
Sahiwal,Vehari,120,10
Hafizabad,Lahore,105,15
Hafizabad,Faisalabad,90,12
Vehari,Bahawalpur,140,10
Hyderabad,Gwadar,550,10
";

/// Build the seed network with room for `max_cities` cities.
pub fn build_network(max_cities: usize) -> NetworkResult<CityGraph> {
    load_network_reader(Cursor::new(CITIES_CSV), Cursor::new(ROADS_CSV), max_cities)
}
