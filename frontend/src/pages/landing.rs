use chrono::{Datelike, Local};
use log::info;
use yew::prelude::*;

use crate::components::{
    accordion::{AccordionItem, AccordionTheme},
    animated_section::AnimatedSection,
    countdown_timer::CountdownTimer,
    cta::{CtaButton, FloatingCta},
    icons::CheckCircleIcon,
};
use crate::config;
use crate::content::{pillar_number, PricingTier, BONUSES, CHAPTERS, FAQ, PILLARS, PRICING_TIERS};

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="container">
                <h2 class="hero-kicker">{"Desconto + 02 Bônus Especiais!"}</h2>
                <h1 class="hero-title">
                    {"Domine a linguagem certa"}<br />
                    {"para atrair leads qualificados"}<br />
                    {"e prontos para comprar."}
                </h1>
                <p class="hero-quote">
                    {"\"Mais importante que gerar mil leads é gerar dez leads prontos para comprar.\""}
                </p>
                <p class="hero-format">{"Livro Digital Download Imediato"}</p>
                <div class="hero-cover">
                    <img
                        src={config::COVER_IMAGE_URL}
                        alt="Capa do Livro Digital Geração de Leads Descomplicada e Eficaz"
                    />
                </div>
                <p class="hero-tagline">{"Não é sobre quantidade de leads, é sobre qualidade de conexões."}</p>
                <h3 class="hero-offer">{"Oferta Especial Liberada"}</h3>
                <p class="hero-ends">{"Encerra em..."}</p>
                <div class="hero-countdown">
                    <CountdownTimer />
                </div>
                <p class="hero-testimonial">
                    {"\"Todo mundo que consegue lucros consistentes geralmente é porque dominou a arte da qualificação de leads. Não tem segredo, se você conseguir qualificar, você alcança a venda.\" - "}
                    <span class="author">{"Therif"}</span>
                </p>
                <CtaButton class={classes!("cta-button--large")}>{"Garanta Agora Mesmo Sua Cópia!"}</CtaButton>
            </div>
        </section>
    }
}

#[function_component(ProblemAgitation)]
fn problem_agitation() -> Html {
    html! {
        <AnimatedSection class={classes!("section", "section--white")}>
            <div class="container container--narrow">
                <div class="problem-block">
                    <h2 class="section-title">{"Por Que a Maioria dos Empreendedores Falha na Geração de Leads — E Como Você Pode se Diferenciar"}</h2>
                    <div class="prose">
                        <p>{"Todo mundo quer gerar leads, mas poucos realmente conseguem transformá-los em vendas consistentes. Enquanto a maioria se concentra em acumular números — mais seguidores, mais tráfego, mais nomes na lista —, você provavelmente já percebeu que isso não se traduz em resultados reais."}</p>
                        <p>
                            {"A frustração surge quando os leads não convertem, quando o funil vaza e quando o esforço não se reflete em lucro. Isso acontece porque a geração de leads não é uma questão de volume, mas de "}
                            <span class="highlight">{"conexão"}</span>
                            {"."}
                        </p>
                        <p>{"Se você não domina a arte de qualificar e nutrir leads de forma estratégica, está apenas alimentando uma ilusão. E o pior: perdendo oportunidades reais de crescimento."}</p>
                    </div>
                </div>
                <div>
                    <h2 class="section-title">{"A Raiz Oculta da Falha na Geração de Leads — E Como Eliminá-la"}</h2>
                    <div class="prose">
                        <p>
                            {"A verdadeira causa da frustração na geração de leads não está na falta de tentativas, mas na "}
                            <span class="highlight">{"ausência de uma conexão genuína"}</span>
                            {" com o público. Enquanto a maioria se concentra em números, o cerne do problema permanece intocado: a incapacidade de transformar interesse em confiança."}
                        </p>
                        <p>{"Leads não são meros dados; são pessoas com dores, desejos e medos. Ignorar essa humanidade é como tentar construir um castelo na areia — por mais esforço que se faça, a base sempre desmorona."}</p>
                        <p>{"A solução não está em mais uma tática milagrosa, mas em uma mudança de perspectiva estratégica. É parar de correr atrás de volume e começar a construir relacionamentos — onde cada interação é pensada para mover o lead em direção à venda, com base em confiança e valor genuíno."}</p>
                    </div>
                </div>
            </div>
        </AnimatedSection>
    }
}

#[function_component(Solution)]
fn solution() -> Html {
    html! {
        <AnimatedSection class={classes!("section", "section--pale")}>
            <div class="container centered">
                <h2 class="section-title section-title--spaced">{"Três Pilares para Transformar Leads em Clientes — Agora Mesmo"}</h2>
                <div class="pillars-grid">
                    { for PILLARS.iter().enumerate().map(|(index, pillar)| html! {
                        <div key={pillar.name} class="pillar-card">
                            <span class="pillar-number">{pillar_number(index)}</span>
                            <h3>{pillar.name}</h3>
                            <p>{pillar.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </AnimatedSection>
    }
}

#[function_component(BookDetails)]
fn book_details() -> Html {
    html! {
        <AnimatedSection class={classes!("section", "section--navy")}>
            <div class="container container--narrow">
                <h2 class="section-title section-title--light">
                    {"Como vai ser a sua experiência nessa leitura? "}
                    <span class="accent">{"Memorável."}</span>
                </h2>
                <p class="book-intro">
                    {"Imagine ter um sistema prático que finalmente descomplica a geração de leads. Um método que não exige budget gigantesco, mas sim ações precisas. Este é o livro "}
                    <strong>{"\"Descubra os Segredos dos Profissionais: Geração de Leads Descomplicada e Eficaz!\""}</strong>
                    {" — um guia direto que corta o ruído e entrega o essencial."}
                </p>
                <div class="chapters">
                    { for CHAPTERS.iter().map(|chapter| html! {
                        <AccordionItem key={chapter.title} theme={AccordionTheme::Dark} title={chapter.title}>
                            {chapter.summary}
                        </AccordionItem>
                    }) }
                </div>
                <p class="book-closing">{"Você vai aprender tudo isso e mais, muito mais! Com a meta de dominar o método para transformar leads em clientes com conversões previsíveis e lucros consistentes."}</p>
            </div>
        </AnimatedSection>
    }
}

#[function_component(Bonuses)]
fn bonuses() -> Html {
    html! {
        <AnimatedSection class={classes!("section", "section--white")}>
            <div class="container centered">
                <h2 class="section-title">{"E ainda tem mais..."}</h2>
                <p class="section-lead">
                    {"Comprando hoje, você leva "}
                    <strong>{"02 bônus exclusivos"}</strong>
                    {" para acelerar seus resultados:"}
                </p>
                <div class="bonus-grid">
                    { for BONUSES.iter().map(|bonus| html! {
                        <div key={bonus.label} class="bonus-card">
                            <span class="bonus-label">{bonus.label}</span>
                            <h3>{bonus.title}</h3>
                            <p>{bonus.description}</p>
                            <p class="strike">{format!("Valor: {}", bonus.value.with_cents())}</p>
                        </div>
                    }) }
                </div>
            </div>
        </AnimatedSection>
    }
}

fn pricing_card(tier: &PricingTier) -> Html {
    let cta_class = if tier.featured {
        classes!("cta-button--block", "cta-button--large", "cta-button--pulse")
    } else {
        classes!("cta-button--block", "cta-button--muted")
    };

    html! {
        <div key={tier.name} class={classes!("pricing-card", tier.featured.then(|| "pricing-card--featured"))}>
            {
                if let Some(badge) = tier.badge {
                    html! { <div class="pricing-badge">{badge}</div> }
                } else {
                    html! {}
                }
            }
            <h3 class="pricing-name">{tier.name}</h3>
            <p class="pricing-tagline">{tier.tagline}</p>
            {
                if let Some(total) = tier.list_total {
                    html! { <p class="strike pricing-total">{format!("Valor Total: {}", total.whole())}</p> }
                } else {
                    html! {}
                }
            }
            <p class="pricing-price">{tier.price.whole()}</p>
            {
                if let Some(note) = tier.payment_note {
                    html! { <p class="pricing-note">{note}</p> }
                } else {
                    html! {}
                }
            }
            <ul class="pricing-features">
                { for tier.features.iter().map(|feature| html! {
                    <li>
                        <CheckCircleIcon class={classes!("icon-check", "icon-check--inline")} />
                        <span>{*feature}</span>
                    </li>
                }) }
            </ul>
            <CtaButton href={tier.checkout_url} class={cta_class}>{tier.cta_label}</CtaButton>
        </div>
    }
}

#[function_component(Pricing)]
fn pricing() -> Html {
    html! {
        <AnimatedSection id="pricing" class={classes!("section", "section--pale")}>
            <div class="container centered">
                <h2 class="section-title section-title--spaced">{"Escolha a melhor oferta para você"}</h2>
                <div class="pricing-row">
                    { for PRICING_TIERS.iter().map(pricing_card) }
                </div>
                <p class="pricing-urgency">{"APROVEITE AGORA: Você NÃO vai encontrar esse preço depois."}</p>
            </div>
        </AnimatedSection>
    }
}

#[function_component(FinalFaq)]
fn final_faq() -> Html {
    html! {
        <AnimatedSection class={classes!("section", "section--navy")}>
            <div class="container container--narrow">
                <h2 class="section-title section-title--light section-title--spaced">{"Ainda tem alguma dúvida?"}</h2>
                <div class="faq-panel">
                    { for FAQ.iter().map(|entry| html! {
                        <AccordionItem key={entry.question} theme={AccordionTheme::Dark} title={entry.question}>
                            {entry.answer}
                        </AccordionItem>
                    }) }
                </div>
                <div class="centered faq-cta">
                    <CtaButton class={classes!("cta-button--xl")}>{"OK! ME CONVENCEU!"}</CtaButton>
                </div>
            </div>
        </AnimatedSection>
    }
}

#[function_component(GuaranteeContact)]
fn guarantee_contact() -> Html {
    html! {
        <AnimatedSection class={classes!("section", "section--white", "section--compact")}>
            <div class="container container--narrow centered guarantee">
                <h3>{"INVESTIMENTO 100% SEGURO!"}</h3>
                <p class="guarantee-terms">{"Se você não gostar da leitura pode solicitar o reembolso em até 7 dias a partir da compra."}</p>
                <div class="divider"></div>
                <p class="guarantee-question">{"Ainda tem alguma dúvida?"}</p>
                <p class="guarantee-email">
                    {"Fale conosco através do email: "}
                    <a href={config::support_mailto()}>{config::SUPPORT_EMAIL}</a>
                </p>
                <p class="guarantee-or">{"...ou pelo Whatsapp abaixo:"}</p>
                <a href={config::whatsapp_link()} target="_blank" rel="noopener noreferrer" class="whatsapp-button">
                    {"TOQUE AQUI E ENVIE MENSAGEM!"}
                </a>
            </div>
        </AnimatedSection>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container centered">
                <p>{format!("Suporte: {}", config::SUPPORT_EMAIL)}</p>
                <p>{format!("© {} Therif Marketing Digital. Todos os direitos reservados.", year)}</p>
                <p class="disclaimer">{"Este site não é afiliado ao Facebook ou a qualquer entidade do Facebook. Depois que você sair do Facebook, a responsabilidade não é deles e sim do nosso site."}</p>
            </div>
        </footer>
    }
}

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    info!("Rendering landing page");

    html! {
        <div class="landing-page">
            <main>
                <Hero />
                <ProblemAgitation />
                <Solution />
                <BookDetails />
                <Bonuses />
                <Pricing />
                <FinalFaq />
                <GuaranteeContact />
            </main>
            <Footer />
            <FloatingCta />
            <style>
                {LANDING_STYLES}
            </style>
        </div>
    }
}

const LANDING_STYLES: &str = r#"
.landing-page {
    font-family: 'Montserrat', sans-serif;
    background: #ffffff;
    margin: 0;
}
.container {
    max-width: 72rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}
.container--narrow {
    max-width: 56rem;
}
.centered {
    text-align: center;
}
.reveal {
    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
}
.reveal-hidden {
    opacity: 0;
    transform: translateY(2.5rem);
}
.reveal-visible {
    opacity: 1;
    transform: translateY(0);
}
.section {
    padding: 4rem 0;
}
.section--compact {
    padding: 4rem 0;
}
.section--white {
    background: #ffffff;
}
.section--pale {
    background: rgba(224, 242, 254, 0.4);
}
.section--navy {
    background: #0a192f;
    color: #ffffff;
}
.section-title {
    font-size: 1.875rem;
    font-weight: 700;
    color: #0a192f;
    margin-bottom: 1.5rem;
    text-align: center;
}
.section-title--light {
    color: #ffffff;
    font-weight: 900;
}
.section-title--spaced {
    margin-bottom: 3rem;
}
.section-lead {
    font-size: 1.125rem;
    color: #475569;
    margin-bottom: 3rem;
}
.accent {
    color: #7dd3fc;
}
.highlight {
    font-weight: 600;
    color: #1d4ed8;
}
.strike {
    font-weight: 700;
    color: #ef4444;
    text-decoration: line-through;
}

/* Hero */
.hero {
    background: #0a192f;
    color: #ffffff;
    padding: 4rem 0;
    text-align: center;
}
.hero-kicker {
    font-size: 1.25rem;
    font-weight: 600;
    color: #7dd3fc;
    max-width: 48rem;
    margin: 0 auto 1rem;
}
.hero-title {
    font-size: 2.25rem;
    font-weight: 900;
    line-height: 1.25;
    margin-bottom: 1.5rem;
}
.hero-quote {
    font-size: 1rem;
    font-weight: 300;
    font-style: italic;
    color: #e5e7eb;
    background: rgba(29, 78, 216, 0.2);
    border-radius: 0.5rem;
    max-width: 48rem;
    margin: 0 auto 2rem;
    padding: 1rem;
}
.hero-format {
    font-size: 1.125rem;
    font-weight: 600;
    letter-spacing: 0.05em;
    color: #d1d5db;
    margin-bottom: 1rem;
}
.hero-cover {
    margin: 2rem 0;
}
.hero-cover img {
    width: 100%;
    max-width: 24rem;
    border-radius: 0.5rem;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
}
.hero-tagline {
    margin: -1rem auto 2.5rem;
    font-size: 1.125rem;
    color: #d1d5db;
    max-width: 48rem;
}
.hero-offer {
    font-size: 1.25rem;
    font-weight: 700;
    color: #e5e7eb;
    margin-bottom: 1rem;
}
.hero-ends {
    color: #9ca3af;
    margin-bottom: 1rem;
}
.hero-countdown {
    display: flex;
    justify-content: center;
    margin-bottom: 2rem;
}
.hero-testimonial {
    font-size: 1.125rem;
    font-style: italic;
    color: #d1d5db;
    max-width: 48rem;
    margin: 0 auto 2.5rem;
    border-left: 4px solid #0ea5e9;
    padding-left: 1rem;
    text-align: left;
}
.hero-testimonial .author {
    font-weight: 600;
    color: #ffffff;
}

/* Countdown */
.countdown {
    display: flex;
    justify-content: center;
    gap: 0.5rem;
    text-align: center;
}
.countdown-value {
    font-size: 2.25rem;
    font-weight: 700;
    background: #ffffff;
    color: #0a192f;
    border-radius: 0.5rem;
    width: 5rem;
    height: 5rem;
    display: flex;
    align-items: center;
    justify-content: center;
}
.countdown-label {
    font-size: 0.875rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    margin-top: 0.5rem;
}

/* Buttons */
.cta-button {
    display: inline-block;
    text-align: center;
    background: #1d4ed8;
    color: #ffffff;
    font-weight: 700;
    letter-spacing: 0.05em;
    text-transform: uppercase;
    text-decoration: none;
    padding: 1rem 2rem;
    border-radius: 0.5rem;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
    transition: all 0.3s;
    box-sizing: border-box;
}
.cta-button:hover {
    background: #0ea5e9;
    transform: scale(1.05);
}
.cta-button--large {
    font-size: 1.125rem;
}
.cta-button--xl {
    font-size: 1.25rem;
}
.cta-button--block {
    width: 100%;
    margin-top: auto;
}
.cta-button--muted {
    background: #334155;
}
.cta-button--muted:hover {
    background: #1e293b;
}
.cta-button--pulse {
    animation: neon-pulse-blue 2s infinite;
}
@keyframes neon-pulse-blue {
    0%, 100% { box-shadow: 0 0 5px #0ea5e9, 0 0 10px #0ea5e9; }
    50% { box-shadow: 0 0 20px #0ea5e9, 0 0 35px #0ea5e9; }
}
.floating-cta {
    position: fixed;
    bottom: 1.5rem;
    right: 1.5rem;
    background: #22c55e;
    padding: 1rem;
    border-radius: 9999px;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
    z-index: 50;
    display: flex;
    transition: all 0.3s;
}
.floating-cta:hover {
    background: #16a34a;
    transform: scale(1.1);
}
.icon-whatsapp {
    width: 2rem;
    height: 2rem;
    color: #ffffff;
}
.icon-check {
    width: 1.5rem;
    height: 1.5rem;
    color: #1d4ed8;
}
.icon-check--inline {
    margin-right: 0.5rem;
    margin-top: 0.25rem;
    flex-shrink: 0;
}

/* Problem */
.problem-block {
    margin-bottom: 4rem;
}
.prose {
    font-size: 1.125rem;
    color: #334155;
    line-height: 1.75;
}

/* Pillars */
.pillars-grid {
    display: grid;
    gap: 2rem;
    max-width: 72rem;
    margin: 0 auto;
}
.pillar-card {
    background: #ffffff;
    padding: 2rem;
    border-radius: 0.5rem;
    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
    text-align: left;
}
.pillar-number {
    font-size: 3rem;
    font-weight: 900;
    color: rgba(14, 165, 233, 0.2);
}
.pillar-card h3 {
    font-size: 1.25rem;
    font-weight: 700;
    color: #0a192f;
    margin: 0.5rem 0 0.75rem;
}
.pillar-card p {
    color: #475569;
}

/* Book */
.book-intro {
    font-size: 1.125rem;
    color: #d1d5db;
    text-align: center;
    margin-bottom: 3rem;
}
.book-closing {
    font-size: 1.125rem;
    font-weight: 600;
    text-align: center;
    margin-top: 3rem;
}

/* Bonuses */
.bonus-grid {
    display: grid;
    gap: 2rem;
    max-width: 56rem;
    margin: 0 auto;
}
.bonus-card {
    background: rgba(224, 242, 254, 0.4);
    border: 1px solid rgba(14, 165, 233, 0.2);
    padding: 2rem;
    border-radius: 0.5rem;
    text-align: left;
}
.bonus-label {
    font-size: 0.875rem;
    font-weight: 700;
    color: #1d4ed8;
    background: rgba(14, 165, 233, 0.2);
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
}
.bonus-card h3 {
    font-size: 1.5rem;
    font-weight: 700;
    color: #0a192f;
    margin: 0.75rem 0;
}
.bonus-card p {
    color: #475569;
    margin-bottom: 1rem;
}
.bonus-card p.strike {
    color: #ef4444;
}

/* Pricing */
.pricing-row {
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: stretch;
    gap: 2rem;
    max-width: 56rem;
    margin: 0 auto;
}
.pricing-card {
    background: #ffffff;
    border: 1px solid #e5e7eb;
    border-radius: 0.5rem;
    padding: 2rem;
    display: flex;
    flex-direction: column;
    position: relative;
    box-sizing: border-box;
}
.pricing-card--featured {
    border: 2px solid #0ea5e9;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}
.pricing-badge {
    position: absolute;
    top: 0;
    left: 50%;
    transform: translate(-50%, -50%);
    background: #0ea5e9;
    color: #ffffff;
    font-size: 0.875rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    padding: 0.25rem 1rem;
    border-radius: 9999px;
    white-space: nowrap;
}
.pricing-name {
    font-size: 1.5rem;
    font-weight: 700;
    color: #0a192f;
}
.pricing-card--featured .pricing-name {
    color: #1d4ed8;
}
.pricing-tagline {
    color: #6b7280;
    margin: 0.25rem 0 1.5rem;
}
.pricing-total {
    font-size: 1.25rem;
}
.pricing-price {
    font-size: 3rem;
    font-weight: 900;
    color: #0a192f;
    margin-bottom: 1.5rem;
}
.pricing-note {
    font-weight: 600;
    color: #475569;
    margin-bottom: 1.5rem;
}
.pricing-features {
    list-style: none;
    padding: 0;
    text-align: left;
    color: #475569;
    margin-bottom: 2rem;
    flex-grow: 1;
}
.pricing-features li {
    display: flex;
    align-items: flex-start;
    margin-bottom: 0.75rem;
}
.pricing-urgency {
    margin-top: 2rem;
    font-weight: 600;
    color: #0a192f;
}

/* FAQ */
.faq-panel {
    background: rgba(29, 78, 216, 0.1);
    padding: 2rem;
    border-radius: 0.5rem;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
}
.faq-cta {
    margin-top: 3rem;
}

/* Guarantee */
.guarantee {
    color: #334155;
}
.guarantee h3 {
    font-size: 1.25rem;
    font-weight: 700;
    color: #0a192f;
    margin-bottom: 0.5rem;
}
.guarantee-terms {
    margin-bottom: 2rem;
}
.divider {
    height: 1px;
    background: #e5e7eb;
    width: 33%;
    margin: 2rem auto;
}
.guarantee-question {
    font-size: 1.125rem;
    font-weight: 600;
    color: #0a192f;
}
.guarantee-email a {
    color: #1d4ed8;
    font-weight: 600;
}
.guarantee-or {
    margin: 0.5rem 0;
}
.whatsapp-button {
    display: inline-block;
    background: #0a192f;
    color: #ffffff;
    font-weight: 600;
    text-decoration: none;
    padding: 0.75rem 1.5rem;
    border-radius: 0.5rem;
    transition: background 0.3s;
}
.whatsapp-button:hover {
    background: #1e293b;
}

/* Footer */
.site-footer {
    background: #000000;
    color: #9ca3af;
    padding: 1.5rem 0;
    font-size: 0.75rem;
}
.site-footer p {
    margin: 0.5rem 0;
}
.site-footer .disclaimer {
    color: #6b7280;
}

/* Accordion */
.accordion-item {
    border-bottom: 1px solid;
    padding: 0.5rem 0;
}
.accordion-trigger {
    display: flex;
    justify-content: space-between;
    align-items: center;
    width: 100%;
    padding: 1rem 0;
    background: none;
    border: none;
    text-align: left;
    cursor: pointer;
    font-family: inherit;
}
.accordion-trigger:focus {
    outline: none;
}
.accordion-title {
    font-size: 1rem;
    font-weight: 600;
    padding-right: 1rem;
}
.accordion-chevron {
    width: 1.5rem;
    height: 1.5rem;
    transform: rotate(0deg);
    transition: transform 0.3s;
}
.accordion-chevron.rotated {
    transform: rotate(180deg);
}
.accordion-content {
    overflow: hidden;
    max-height: 0;
    opacity: 0;
    transition: all 0.5s ease-in-out;
}
.accordion-content.open {
    max-height: 100vh;
    opacity: 1;
}
.accordion-body {
    padding: 0.5rem 0 1rem;
    line-height: 1.6;
}
.accordion-item--light { border-color: #bfdbfe; }
.accordion-item--light .accordion-title { color: #0a192f; }
.accordion-item--light .accordion-icon { color: #1d4ed8; }
.accordion-item--light .accordion-body { color: #334155; }
.accordion-item--dark { border-color: rgba(29, 78, 216, 0.3); }
.accordion-item--dark .accordion-title { color: #e0f2fe; }
.accordion-item--dark .accordion-icon { color: #7dd3fc; }
.accordion-item--dark .accordion-body { color: #d1d5db; }

@media (min-width: 640px) {
    .countdown { gap: 1rem; }
}
@media (min-width: 768px) {
    .section { padding: 6rem 0; }
    .section--compact { padding: 4rem 0; }
    .section-title { font-size: 2.25rem; }
    .hero { padding: 6rem 0; }
    .hero-kicker { font-size: 1.5rem; }
    .hero-title { font-size: 4.5rem; }
    .hero-quote { font-size: 1.125rem; }
    .hero-cover img { max-width: 28rem; }
    .hero-offer { font-size: 1.5rem; }
    .countdown-value { font-size: 3rem; width: 6rem; height: 6rem; }
    .accordion-title { font-size: 1.125rem; }
    .pillars-grid { grid-template-columns: repeat(3, 1fr); }
    .bonus-grid { grid-template-columns: repeat(2, 1fr); }
    .pricing-row { flex-direction: row; }
    .pricing-card { width: 50%; }
}
"#;
