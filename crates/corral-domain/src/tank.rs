use corral_core::prelude::*;
use std::fmt;

///
/// Tank
///
/// An armored vehicle in <hp, d, a, p> where hitPoint(hp), damage(d),
/// armor(a), price(p). Combat stats are mutable; the price is fixed at
/// construction. For the variant whose price can change, see
/// [`crate::game::Tank`].
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Tank {
    hit_point: i64,
    damage: i64,
    armor: i64,
    price: i64,
}

impl Tank {
    pub fn new(
        hit_point: i64,
        damage: i64,
        armor: i64,
        price: i64,
    ) -> Result<Self, ConstructionError> {
        construct(Self {
            hit_point,
            damage,
            armor,
            price,
        })
    }

    #[must_use]
    pub const fn hit_point(&self) -> i64 {
        self.hit_point
    }

    #[must_use]
    pub const fn damage(&self) -> i64 {
        self.damage
    }

    #[must_use]
    pub const fn armor(&self) -> i64 {
        self.armor
    }

    #[must_use]
    pub const fn price(&self) -> i64 {
        self.price
    }

    pub fn set_hit_point(&mut self, hit_point: i64) -> Result<(), InvalidMutation> {
        check_field::<Self>("hit_point", &Value::Int(hit_point))?;
        self.hit_point = hit_point;

        Ok(())
    }

    pub fn set_damage(&mut self, damage: i64) -> Result<(), InvalidMutation> {
        check_field::<Self>("damage", &Value::Int(damage))?;
        self.damage = damage;

        Ok(())
    }

    pub fn set_armor(&mut self, armor: i64) -> Result<(), InvalidMutation> {
        check_field::<Self>("armor", &Value::Int(armor))?;
        self.armor = armor;

        Ok(())
    }

    // no set_price: the field is declared immutable
}

impl Record for Tank {
    const MODEL: RecordModel = RecordModel {
        name: "Tank",
        fields: &[
            FieldModel {
                name: "hit_point",
                kind: FieldKind::Int,
                mutable: true,
                optional: false,
                constraints: &[ConstraintModel::Range {
                    min: Some(1),
                    max: None,
                }],
            },
            FieldModel {
                name: "damage",
                kind: FieldKind::Int,
                mutable: true,
                optional: false,
                constraints: &[ConstraintModel::Range {
                    min: Some(1),
                    max: None,
                }],
            },
            FieldModel {
                name: "armor",
                kind: FieldKind::Int,
                mutable: true,
                optional: false,
                constraints: &[ConstraintModel::Range {
                    min: Some(0),
                    max: None,
                }],
            },
            FieldModel {
                name: "price",
                kind: FieldKind::Int,
                mutable: false,
                optional: false,
                constraints: &[ConstraintModel::Range {
                    min: Some(1),
                    max: None,
                }],
            },
        ],
    };

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "hit_point" => Some(Value::Int(self.hit_point)),
            "damage" => Some(Value::Int(self.damage)),
            "armor" => Some(Value::Int(self.armor)),
            "price" => Some(Value::Int(self.price)),
            _ => None,
        }
    }
}

impl fmt::Display for Tank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

///
/// TESTS
///
