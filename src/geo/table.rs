//! Canonical country to continent table
//!
//! Names are matched exactly as they appear in catalog exports, including
//! historical states and territories. Transcontinental countries are placed
//! where catalog dashboards conventionally draw them.

use super::Continent::{self, *};

pub(crate) const COUNTRIES: &[(&str, Continent)] = &[
    // Africa
    ("Algeria", Africa),
    ("Angola", Africa),
    ("Benin", Africa),
    ("Botswana", Africa),
    ("Burkina Faso", Africa),
    ("Burundi", Africa),
    ("Cabo Verde", Africa),
    ("Cape Verde", Africa),
    ("Cameroon", Africa),
    ("Central African Republic", Africa),
    ("Chad", Africa),
    ("Comoros", Africa),
    ("Democratic Republic of the Congo", Africa),
    ("Republic of the Congo", Africa),
    ("Congo", Africa),
    ("Djibouti", Africa),
    ("Egypt", Africa),
    ("Equatorial Guinea", Africa),
    ("Eritrea", Africa),
    ("Eswatini", Africa),
    ("Swaziland", Africa),
    ("Ethiopia", Africa),
    ("Gabon", Africa),
    ("Gambia", Africa),
    ("Ghana", Africa),
    ("Guinea", Africa),
    ("Guinea-Bissau", Africa),
    ("Ivory Coast", Africa),
    ("Côte d'Ivoire", Africa),
    ("Kenya", Africa),
    ("Lesotho", Africa),
    ("Liberia", Africa),
    ("Libya", Africa),
    ("Madagascar", Africa),
    ("Malawi", Africa),
    ("Mali", Africa),
    ("Mauritania", Africa),
    ("Mauritius", Africa),
    ("Morocco", Africa),
    ("Mozambique", Africa),
    ("Namibia", Africa),
    ("Niger", Africa),
    ("Nigeria", Africa),
    ("Rwanda", Africa),
    ("Sao Tome and Principe", Africa),
    ("Senegal", Africa),
    ("Seychelles", Africa),
    ("Sierra Leone", Africa),
    ("Somalia", Africa),
    ("South Africa", Africa),
    ("South Sudan", Africa),
    ("Sudan", Africa),
    ("Tanzania", Africa),
    ("Togo", Africa),
    ("Tunisia", Africa),
    ("Uganda", Africa),
    ("Western Sahara", Africa),
    ("Zambia", Africa),
    ("Zimbabwe", Africa),
    // Asia
    ("Afghanistan", Asia),
    ("Armenia", Asia),
    ("Azerbaijan", Asia),
    ("Bahrain", Asia),
    ("Bangladesh", Asia),
    ("Bhutan", Asia),
    ("Brunei", Asia),
    ("Cambodia", Asia),
    ("China", Asia),
    ("Georgia", Asia),
    ("Hong Kong", Asia),
    ("India", Asia),
    ("Indonesia", Asia),
    ("Iran", Asia),
    ("Iraq", Asia),
    ("Israel", Asia),
    ("Japan", Asia),
    ("Jordan", Asia),
    ("Kazakhstan", Asia),
    ("Kuwait", Asia),
    ("Kyrgyzstan", Asia),
    ("Laos", Asia),
    ("Lebanon", Asia),
    ("Macau", Asia),
    ("Malaysia", Asia),
    ("Maldives", Asia),
    ("Mongolia", Asia),
    ("Myanmar", Asia),
    ("Nepal", Asia),
    ("North Korea", Asia),
    ("Oman", Asia),
    ("Pakistan", Asia),
    ("Palestine", Asia),
    ("Philippines", Asia),
    ("Qatar", Asia),
    ("Saudi Arabia", Asia),
    ("Singapore", Asia),
    ("South Korea", Asia),
    ("Sri Lanka", Asia),
    ("Syria", Asia),
    ("Taiwan", Asia),
    ("Tajikistan", Asia),
    ("Thailand", Asia),
    ("Timor-Leste", Asia),
    ("East Timor", Asia),
    ("Turkey", Asia),
    ("Turkmenistan", Asia),
    ("United Arab Emirates", Asia),
    ("Uzbekistan", Asia),
    ("Vietnam", Asia),
    ("Yemen", Asia),
    // Europe
    ("Albania", Europe),
    ("Andorra", Europe),
    ("Austria", Europe),
    ("Belarus", Europe),
    ("Belgium", Europe),
    ("Bosnia and Herzegovina", Europe),
    ("Bulgaria", Europe),
    ("Croatia", Europe),
    ("Cyprus", Europe),
    ("Czech Republic", Europe),
    ("Czechia", Europe),
    ("Denmark", Europe),
    ("East Germany", Europe),
    ("Estonia", Europe),
    ("Faroe Islands", Europe),
    ("Finland", Europe),
    ("France", Europe),
    ("Germany", Europe),
    ("Greece", Europe),
    ("Hungary", Europe),
    ("Iceland", Europe),
    ("Ireland", Europe),
    ("Italy", Europe),
    ("Kosovo", Europe),
    ("Latvia", Europe),
    ("Liechtenstein", Europe),
    ("Lithuania", Europe),
    ("Luxembourg", Europe),
    ("Malta", Europe),
    ("Moldova", Europe),
    ("Monaco", Europe),
    ("Montenegro", Europe),
    ("Netherlands", Europe),
    ("North Macedonia", Europe),
    ("Norway", Europe),
    ("Poland", Europe),
    ("Portugal", Europe),
    ("Romania", Europe),
    ("Russia", Europe),
    ("San Marino", Europe),
    ("Serbia", Europe),
    ("Slovakia", Europe),
    ("Slovenia", Europe),
    ("Soviet Union", Europe),
    ("Spain", Europe),
    ("Sweden", Europe),
    ("Switzerland", Europe),
    ("Ukraine", Europe),
    ("United Kingdom", Europe),
    ("Vatican City", Europe),
    ("West Germany", Europe),
    ("Yugoslavia", Europe),
    // North America
    ("Antigua and Barbuda", NorthAmerica),
    ("Bahamas", NorthAmerica),
    ("Barbados", NorthAmerica),
    ("Belize", NorthAmerica),
    ("Bermuda", NorthAmerica),
    ("Canada", NorthAmerica),
    ("Cayman Islands", NorthAmerica),
    ("Costa Rica", NorthAmerica),
    ("Cuba", NorthAmerica),
    ("Dominica", NorthAmerica),
    ("Dominican Republic", NorthAmerica),
    ("El Salvador", NorthAmerica),
    ("Greenland", NorthAmerica),
    ("Grenada", NorthAmerica),
    ("Guatemala", NorthAmerica),
    ("Haiti", NorthAmerica),
    ("Honduras", NorthAmerica),
    ("Jamaica", NorthAmerica),
    ("Mexico", NorthAmerica),
    ("Nicaragua", NorthAmerica),
    ("Panama", NorthAmerica),
    ("Puerto Rico", NorthAmerica),
    ("Saint Kitts and Nevis", NorthAmerica),
    ("Saint Lucia", NorthAmerica),
    ("Saint Vincent and the Grenadines", NorthAmerica),
    ("Trinidad and Tobago", NorthAmerica),
    ("United States", NorthAmerica),
    // South America
    ("Argentina", SouthAmerica),
    ("Bolivia", SouthAmerica),
    ("Brazil", SouthAmerica),
    ("Chile", SouthAmerica),
    ("Colombia", SouthAmerica),
    ("Ecuador", SouthAmerica),
    ("French Guiana", SouthAmerica),
    ("Guyana", SouthAmerica),
    ("Paraguay", SouthAmerica),
    ("Peru", SouthAmerica),
    ("Suriname", SouthAmerica),
    ("Uruguay", SouthAmerica),
    ("Venezuela", SouthAmerica),
    // Oceania
    ("Australia", Oceania),
    ("Fiji", Oceania),
    ("Kiribati", Oceania),
    ("Marshall Islands", Oceania),
    ("Micronesia", Oceania),
    ("Nauru", Oceania),
    ("New Zealand", Oceania),
    ("Palau", Oceania),
    ("Papua New Guinea", Oceania),
    ("Samoa", Oceania),
    ("Solomon Islands", Oceania),
    ("Tonga", Oceania),
    ("Tuvalu", Oceania),
    ("Vanuatu", Oceania),
    // Antarctica
    ("Antarctica", Antarctica),
];
