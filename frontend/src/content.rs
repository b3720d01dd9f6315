//! Copy for the landing page sections.

use crate::config;

/// Whole-real price.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Price(pub u32);

impl Price {
    /// `R$47`
    pub fn whole(&self) -> String {
        format!("R${}", self.0)
    }

    /// `R$47,00`
    pub fn with_cents(&self) -> String {
        format!("R${},00", self.0)
    }
}

pub struct Pillar {
    pub name: &'static str,
    pub description: &'static str,
}

/// Card number shown behind each pillar, e.g. `01`.
pub fn pillar_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

pub const PILLARS: [Pillar; 3] = [
    Pillar {
        name: "Segmentação Inteligente",
        description: "Em vez de tratar todos os leads da mesma forma, você vai aprender a dividi-los com base em comportamentos, interesses e estágios no funil para criar uma conexão emocional que transcende a transação.",
    },
    Pillar {
        name: "Automação Humanizada",
        description: "Utilize ferramentas para nutrir leads de forma consistente, mas sem perder o toque pessoal. Sequências de e-mails personalizadas e conteúdo relevante farão seus leads sentirem-se valorizados.",
    },
    Pillar {
        name: "Conteúdo de Valor Contínuo",
        description: "Ofereça insights, soluções e educação antes mesmo de pedir algo em troca. Isso constrói confiança e posiciona você como autoridade, não como mais um vendedor.",
    },
];

pub struct Chapter {
    pub title: &'static str,
    pub summary: &'static str,
}

pub const CHAPTERS: [Chapter; 4] = [
    Chapter {
        title: "Capítulo 1 – Domine a Arte da Geração de Leads e Potencialize Seus Lucros!",
        summary: "Você vai aprender a explorar os instintos primitivos do cérebro para gerar leads, despertar urgência e superar obstáculos para escalar sua captação.",
    },
    Chapter {
        title: "Capítulo 2 – Construa Confiança e Relacionamentos Sólidos",
        summary: "Descubra como substituir a coleta agressiva de dados por relacionamentos baseados em valor, transformando leads em defensores fiéis da sua marca.",
    },
    Chapter {
        title: "Capítulo 3 – Fundamentos e Técnicas Avançadas",
        summary: "Aprenda a aplicar personalização, ofertas irresistíveis, automação inteligente e segmentação precisa para criar um fluxo contínuo de leads qualificados.",
    },
    Chapter {
        title: "Capítulo 4 – Estratégias de Conteúdo Persuasivas",
        summary: "Domine a arte de contar histórias que ativam emoções e criam ligações profundas, usando os formatos de conteúdo mais eficazes para guiar leads naturalmente pelo funil.",
    },
];

pub struct Bonus {
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub value: Price,
}

pub const BONUSES: [Bonus; 2] = [
    Bonus {
        label: "BÔNUS #1",
        title: "SEO que Vende: O Guia para Atrair Clientes, Não Apenas Visitantes",
        description: "Esqueça a complexidade do SEO técnico. Neste guia prático, você vai descobrir como otimizar seu conteúdo para que o Google trabalhe para você, 24/7. Aprenda a encontrar as palavras-chave que seus clientes ideais estão buscando e crie uma base para um fluxo constante de tráfego qualificado, que chega pronto para comprar.",
        value: Price(47),
    },
    Bonus {
        label: "BÔNUS #2",
        title: "A Arte da Conversão: Como Transformar Palavras em Vendas",
        description: "De que adianta ter a atenção do público se você não sabe o que fazer com ela? Neste bônus exclusivo, você aprenderá os segredos da escrita persuasiva (copywriting) para criar posts, e-mails e páginas que geram ação, dominando a psicologia por trás da decisão de compra.",
        value: Price(97),
    },
];

pub struct PricingTier {
    pub name: &'static str,
    pub tagline: &'static str,
    pub price: Price,
    /// Crossed-out "total value" shown above the price.
    pub list_total: Option<Price>,
    pub payment_note: Option<&'static str>,
    pub features: &'static [&'static str],
    pub checkout_url: &'static str,
    pub cta_label: &'static str,
    pub featured: bool,
    pub badge: Option<&'static str>,
}

pub const PRICING_TIERS: [PricingTier; 2] = [
    PricingTier {
        name: "PLANO BÁSICO",
        tagline: "E-BOOK COMPLETO",
        price: Price(10),
        list_total: None,
        payment_note: None,
        features: &[
            "E-book 93 paginas: Geração de Leads Descomplicada e Eficaz!",
            "Acesso vitalício.",
            "7 dias Garantia.",
        ],
        checkout_url: config::BASIC_PLAN_CHECKOUT_URL,
        cta_label: "Quero Essa Opção",
        featured: false,
        badge: None,
    },
    PricingTier {
        name: "PLANO COMPLETO",
        tagline: "SUPER OFERTA",
        price: Price(47),
        list_total: Some(Price(197)),
        payment_note: Some("HOJE PAGAMENTO ÚNICO..."),
        features: &[
            "E-book 93 paginas: Descubra os Segredos dos Profissionais: Geração de Leads Descomplicada e Eficaz!",
            "E-book 56 páginas: Desbloqueie o Potencial do SEO e Alavanque Suas Vendas!",
            "E-book 124 páginas: Persuasão Poderosa Transforme Visitantes em Seguidores Apaixonados",
            "Acesso Vitalício.",
            "7 dias de Garantia.",
        ],
        checkout_url: config::COMPLETE_PLAN_CHECKOUT_URL,
        cta_label: "Sim! Quero Essa Super Oferta!",
        featured: true,
        badge: Some("Melhor Negócio"),
    },
];

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: [FaqEntry; 4] = [
    FaqEntry {
        question: "Não li tudo, pode resumir pra mim?",
        answer: "A proposta é simples: você vai terminar a leitura deste E-book sabendo tudo o que precisa para dominar a arte da geração de leads e aumentar seus lucros. Você terá acesso ao exato caminho que nós e nossos clientes seguimos para transformar leads em vendas de forma consistente.",
    },
    FaqEntry {
        question: "Se é tão bom, por que está tão barato?",
        answer: "Temos duas razões. Primeiro, para que o valor não seja um obstáculo para ninguém. Segundo, para afastar curiosos que buscam apenas soluções gratuitas. Acreditamos que, ao gostar do produto, você terá vontade de comprar outros treinamentos no futuro. É uma relação ganha-ganha.",
    },
    FaqEntry {
        question: "Em quanto tempo recebo meu acesso?",
        answer: "Imediatamente! Logo após a aprovação do seu pagamento, você receberá no seu e-mail de compra os dados de acesso à nossa área de membros premium.",
    },
    FaqEntry {
        question: "O pagamento é único? E se eu não gostar?",
        answer: "Sim, o pagamento é único, não é uma assinatura. E o risco é todo nosso! Se você não gostar da leitura, pode solicitar o reembolso total em até 7 dias a partir da compra. Você não tem nada a perder.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_formats() {
        assert_eq!(Price(47).whole(), "R$47");
        assert_eq!(Price(97).with_cents(), "R$97,00");
    }

    #[test]
    fn pillars_are_numbered_from_one() {
        let numbers: Vec<String> = (0..PILLARS.len()).map(pillar_number).collect();
        assert_eq!(numbers, ["01", "02", "03"]);
    }

    #[test]
    fn exactly_one_featured_tier_on_the_complete_checkout() {
        let featured: Vec<&PricingTier> = PRICING_TIERS.iter().filter(|tier| tier.featured).collect();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].checkout_url, config::COMPLETE_PLAN_CHECKOUT_URL);
        assert!(featured[0].badge.is_some());
    }

    #[test]
    fn crossed_out_total_exceeds_offer_price() {
        for tier in PRICING_TIERS.iter() {
            if let Some(total) = tier.list_total {
                assert!(total.0 > tier.price.0, "{} total not above price", tier.name);
            }
            assert!(!tier.features.is_empty());
        }
    }
}
