use std::collections::HashSet;

use anyhow::{Context as _, Result, bail};
use indexmap::{IndexMap, IndexSet};

use crate::office::{BadgeToken, Employee};

// (id, external_id, first_name, last_name, secret, temperature, light level, badge token)
const BUILTIN_EMPLOYEES: &[(u32, &str, &str, &str, &str, f64, f64, &str)] = &[
    (1, "25000019", "João Augusto", "Freitas", "123", 18.0, 25.0, "8E0F3503"),
    (2, "25000795", "Kauan", "Leander Leandrini", "123", 30.0, 75.0, "6C227B1C"),
    (3, "25001248", "Everson", "Chagas Araújo", "123", 22.0, 50.0, "AC71771C"),
    (4, "25001227", "Isadora", "Cabral dos Santos", "123", 26.0, 100.0, "8CE3721C"),
];

/// Read-only list of employees, keyed by badge token in roster order.
#[derive(Debug, Clone)]
pub struct Roster {
    employees: IndexMap<BadgeToken, Employee>,
}

impl Roster {
    pub fn new(employees: Vec<Employee>) -> Result<Self> {
        let mut ids = HashSet::with_capacity(employees.len());
        let mut by_token = IndexMap::with_capacity(employees.len());

        for employee in employees {
            if !ids.insert(employee.id) {
                bail!("duplicate employee id: {}", employee.id);
            }

            if by_token.contains_key(&employee.badge_token) {
                bail!("duplicate badge token: {}", employee.badge_token);
            }

            by_token.insert(employee.badge_token.clone(), employee);
        }

        Ok(Self {
            employees: by_token,
        })
    }

    pub fn builtin() -> Result<Self> {
        let employees = BUILTIN_EMPLOYEES
            .iter()
            .map(
                |&(id, external_id, first_name, last_name, secret, temp, light, token)| {
                    Ok(Employee {
                        id,
                        external_id: external_id.to_owned(),
                        first_name: first_name.to_owned(),
                        last_name: last_name.to_owned(),
                        secret: secret.to_owned(),
                        preferred_temperature: temp,
                        preferred_light_level: light,
                        badge_token: token
                            .parse()
                            .with_context(|| format!("invalid badge token for employee {id}"))?,
                    })
                },
            )
            .collect::<Result<Vec<_>>>()?;

        Self::new(employees)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    pub fn badge_tokens(&self) -> Vec<&BadgeToken> {
        self.employees.keys().collect()
    }

    pub fn get(&self, token: &BadgeToken) -> Option<&Employee> {
        self.employees.get(token)
    }

    /// Preferred temperatures of the present employees, in roster order.
    pub fn preferred_temperatures(&self, present: &IndexSet<BadgeToken>) -> Vec<f64> {
        self.employees
            .values()
            .filter(|e| present.contains(&e.badge_token))
            .map(|e| e.preferred_temperature)
            .collect()
    }

    pub fn mean_preferred_temperature(&self, present: &IndexSet<BadgeToken>) -> Option<f64> {
        let temperatures = self.preferred_temperatures(present);
        if temperatures.is_empty() {
            return None;
        }

        Some(temperatures.iter().sum::<f64>() / temperatures.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(s: &str) -> BadgeToken {
        s.parse().unwrap()
    }

    fn employee(id: u32, temp: f64, badge: &str) -> Employee {
        Employee {
            id,
            external_id: format!("ext-{id}"),
            first_name: "First".to_owned(),
            last_name: "Last".to_owned(),
            secret: "123".to_owned(),
            preferred_temperature: temp,
            preferred_light_level: 50.0,
            badge_token: token(badge),
        }
    }

    #[test]
    fn builtin_roster_has_four_distinct_tokens() {
        let roster = Roster::builtin().unwrap();
        assert_eq!(roster.len(), 4);

        let tokens: Vec<&str> = roster.badge_tokens().iter().map(|t| t.as_str()).collect();
        assert_eq!(tokens, ["8E0F3503", "6C227B1C", "AC71771C", "8CE3721C"]);
        assert_eq!(roster.get(&token("AC71771C")).unwrap().first_name, "Everson");
    }

    #[test]
    fn rejects_duplicate_badge_tokens() {
        let employees = vec![employee(1, 20.0, "AAAA"), employee(2, 22.0, "AAAA")];
        let err = Roster::new(employees).unwrap_err();
        assert!(err.to_string().contains("duplicate badge token"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let employees = vec![employee(1, 20.0, "AAAA"), employee(1, 22.0, "BBBB")];
        let err = Roster::new(employees).unwrap_err();
        assert!(err.to_string().contains("duplicate employee id"));
    }

    #[test]
    fn preferred_temperatures_follow_roster_order() {
        let roster = Roster::builtin().unwrap();
        let present: IndexSet<BadgeToken> = [token("8CE3721C"), token("8E0F3503")].into();

        assert_eq!(roster.preferred_temperatures(&present), vec![18.0, 26.0]);
        assert_eq!(roster.mean_preferred_temperature(&present), Some(22.0));
    }

    #[test]
    fn mean_of_nobody_is_none() {
        let roster = Roster::builtin().unwrap();
        assert_eq!(roster.mean_preferred_temperature(&IndexSet::new()), None);

        let strangers: IndexSet<BadgeToken> = [token("FFFFFFFF")].into();
        assert_eq!(roster.mean_preferred_temperature(&strangers), None);
    }
}
