use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const SEED_SQL: &str = r#"
INSERT INTO diseases (id, name, slug, overview, symptoms, causes, prevention, treatment)
VALUES
(
    gen_random_uuid(),
    'Cholera',
    'cholera',
    'Cholera is an acute diarrhoeal infection caused by ingesting food or water contaminated with the bacterium Vibrio cholerae. It can kill within hours if left untreated.',
    '["Profuse watery diarrhoea (rice-water stools)", "Vomiting", "Rapid dehydration", "Leg cramps", "Sunken eyes and dry mouth"]'::jsonb,
    'Drinking water or eating food contaminated with Vibrio cholerae, usually where sanitation and safe water supply are inadequate, especially after floods.',
    '["Drink boiled, chlorinated or bottled water", "Wash hands with soap after using the toilet and before eating", "Eat food that is cooked and served hot", "Use sanitary latrines and keep them away from water sources"]'::jsonb,
    'Immediate rehydration with oral rehydration solution (ORS); intravenous fluids for severe cases; antibiotics as prescribed by a clinician; zinc supplements for children.'
),
(
    gen_random_uuid(),
    'Typhoid Fever',
    'typhoid',
    'Typhoid is a systemic bacterial infection caused by Salmonella Typhi, spread through contaminated food and water.',
    '["Prolonged high fever", "Headache", "Abdominal pain", "Weakness and fatigue", "Constipation or diarrhoea", "Rose-coloured spots on the chest"]'::jsonb,
    'Ingestion of food or water contaminated with faeces of an infected person or a carrier.',
    '["Drink safe, treated water", "Avoid raw food from street vendors", "Wash hands frequently", "Get vaccinated in endemic areas"]'::jsonb,
    'Antibiotics prescribed after diagnosis, adequate fluids and nutrition, and rest. Complete the full antibiotic course.'
),
(
    gen_random_uuid(),
    'Hepatitis A',
    'hepatitis-a',
    'Hepatitis A is a viral liver infection transmitted through the faecal-oral route, commonly via contaminated water or food.',
    '["Fever", "Loss of appetite", "Nausea and vomiting", "Dark urine", "Yellowing of skin and eyes (jaundice)", "Abdominal discomfort"]'::jsonb,
    'Hepatitis A virus spread through contaminated food or water and close contact with an infected person.',
    '["Use safe drinking water", "Practise good hand hygiene", "Ensure proper sewage disposal", "Vaccination"]'::jsonb,
    'No specific antiviral treatment. Supportive care: rest, hydration and a balanced diet; avoid alcohol and unnecessary medication.'
),
(
    gen_random_uuid(),
    'Acute Diarrhoeal Disease',
    'diarrhoea',
    'Acute diarrhoea is the passage of three or more loose or liquid stools per day, most often caused by contaminated water and poor hygiene.',
    '["Frequent loose stools", "Abdominal cramps", "Nausea", "Dehydration", "Fever in some cases"]'::jsonb,
    'Bacteria, viruses or parasites from contaminated water, food or hands.',
    '["Drink safe water", "Wash hands with soap", "Exclusive breastfeeding for infants", "Safe food handling"]'::jsonb,
    'Oral rehydration solution and zinc; continued feeding; seek care if blood in stool, persistent vomiting or signs of severe dehydration.'
),
(
    gen_random_uuid(),
    'Dysentery',
    'dysentery',
    'Dysentery is an intestinal infection causing diarrhoea with blood or mucus, commonly due to Shigella or Entamoeba histolytica.',
    '["Diarrhoea with blood or mucus", "Abdominal pain and cramps", "Fever", "Urgency to pass stool"]'::jsonb,
    'Faecal contamination of water and food; person-to-person spread in crowded settings with poor sanitation.',
    '["Wash hands after toilet use", "Drink treated water", "Cover and store food safely", "Dispose of faeces safely"]'::jsonb,
    'Rehydration, and antibiotics or antiprotozoal medication prescribed by a clinician.'
)
ON CONFLICT (slug) DO NOTHING;
"#;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.get_connection().execute_unprepared(SEED_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DELETE FROM diseases WHERE slug IN ('cholera', 'typhoid', 'hepatitis-a', 'diarrhoea', 'dysentery')",
            )
            .await?;
        Ok(())
    }
}
