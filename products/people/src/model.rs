use entity::employment_details;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    #[serde(rename = "bs")]
    pub tagline: String,
}

/// A user profile as served by the remote profile API.
///
/// Contact sections are optional because the upstream omits them for some
/// accounts; they serialize as `null` rather than disappearing. Upstream keys
/// not listed here (`username`) are dropped on decode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub address: Option<Address>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub company: Option<Company>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentRecord {
    pub id: i32,
    pub designation: String,
    pub salary: i32,
}

impl From<employment_details::Model> for EmploymentRecord {
    fn from(model: employment_details::Model) -> Self {
        Self {
            id: model.id,
            designation: model.designation,
            salary: model.salary,
        }
    }
}

/// Profile fields at the top level with the employment row nested under
/// `employment`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeUser {
    #[serde(flatten)]
    pub profile: Profile,
    pub employment: EmploymentRecord,
}

impl CompositeUser {
    pub fn merge(profile: Profile, employment: EmploymentRecord) -> Self {
        Self {
            profile,
            employment,
        }
    }

    pub fn id(&self) -> i32 {
        self.profile.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_upstream_profile() {
        let raw = json!({
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": {"lat": "-37.3159", "lng": "81.1496"}
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        });
        let profile: Profile = serde_json::from_value(raw).unwrap();
        assert_eq!(profile.name, "Leanne Graham");
        let company = profile.company.unwrap();
        assert_eq!(company.tagline, "harness real-time e-markets");
        assert_eq!(profile.address.unwrap().geo.lng, "81.1496");
    }

    #[test]
    fn composite_flattens_profile_and_nests_employment() {
        let profile = Profile {
            id: 1,
            name: "Ann".into(),
            email: "ann@example.test".into(),
            address: None,
            phone: None,
            website: None,
            company: None,
        };
        let employment = EmploymentRecord {
            id: 1,
            designation: "Engineer".into(),
            salary: 90_000,
        };
        let value = serde_json::to_value(CompositeUser::merge(profile, employment)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Ann",
                "email": "ann@example.test",
                "address": null,
                "phone": null,
                "website": null,
                "company": null,
                "employment": {"id": 1, "designation": "Engineer", "salary": 90000}
            })
        );
    }

    #[test]
    fn username_is_not_part_of_the_composite() {
        let profile: Profile = serde_json::from_value(json!({
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": null,
            "phone": null,
            "website": null,
            "company": null
        }))
        .unwrap();
        let employment = EmploymentRecord {
            id: 1,
            designation: "Engineer".into(),
            salary: 90_000,
        };
        let value = serde_json::to_value(CompositeUser::merge(profile, employment)).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "address",
                "company",
                "email",
                "employment",
                "id",
                "name",
                "phone",
                "website"
            ]
        );
    }
}
