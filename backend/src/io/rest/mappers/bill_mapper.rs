use crate::domain::models::bill::Bill as DomainBill;
use shared::Bill as SharedBill;

pub struct BillMapper;

impl BillMapper {
    pub fn to_domain(dto: SharedBill) -> DomainBill {
        DomainBill::from(dto)
    }

    pub fn to_dto(domain: DomainBill) -> SharedBill {
        SharedBill {
            id: domain.id,
            bill_name: domain.bill_name,
            amount: domain.amount,
            date: domain.date,
            status: domain.status,
            payer: domain.payer,
            description: domain.description,
        }
    }

    pub fn to_dtos(bills: Vec<DomainBill>) -> Vec<SharedBill> {
        bills.into_iter().map(Self::to_dto).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_optional_fields_become_none() {
        let dto = SharedBill {
            id: "m1".to_string(),
            bill_name: "Streaming".to_string(),
            amount: 9.99,
            date: "2024-02-14".to_string(),
            status: Some(String::new()),
            payer: Some("Jo".to_string()),
            description: None,
        };

        let domain = BillMapper::to_domain(dto);
        assert_eq!(domain.status, None);
        assert_eq!(domain.payer.as_deref(), Some("Jo"));

        let back = BillMapper::to_dto(domain);
        assert_eq!(back.status, None);
        assert_eq!(back.bill_name, "Streaming");
    }
}
