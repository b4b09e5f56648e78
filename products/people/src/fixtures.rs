use crate::model::{Address, Company, EmploymentRecord, Geo, Profile};

pub(crate) fn profile(id: i32, name: &str) -> Profile {
    Profile {
        id,
        name: name.to_string(),
        email: format!("{}@example.test", name.to_lowercase()),
        address: Some(Address {
            street: "Kulas Light".into(),
            suite: format!("Apt. {id}"),
            city: "Gwenborough".into(),
            zipcode: "92998-3874".into(),
            geo: Geo {
                lat: "-37.3159".into(),
                lng: "81.1496".into(),
            },
        }),
        phone: Some("1-770-736-8031".into()),
        website: Some("example.test".into()),
        company: Some(Company {
            name: "Romaguera-Crona".into(),
            catch_phrase: "Multi-layered client-server neural-net".into(),
            tagline: "harness real-time e-markets".into(),
        }),
    }
}

pub(crate) fn record(id: i32, designation: &str, salary: i32) -> EmploymentRecord {
    EmploymentRecord {
        id,
        designation: designation.to_string(),
        salary,
    }
}
