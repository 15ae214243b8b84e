//! Embedded homepage document
//!
//! The catalog front end is a single fixed HTML page; it fetches records
//! from the gateway's JSON routes client-side and renders a grid of cards.
//! Served unchanged for every path the router does not recognize.

/// The fixed homepage HTML
pub const fn get_homepage() -> &'static str {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Cyber AI Hub</title>
    <style>
        :root {
            --cyber-primary: #00ffff;
            --cyber-secondary: #ff00ff;
            --cyber-dark: #0a0a12;
            --cyber-darker: #000000;
            --cyber-light: #ffffff;
            --neon-glow: 0 0 10px var(--cyber-primary), 0 0 20px var(--cyber-primary);
        }
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }
        body {
            font-family: 'Courier New', monospace;
            background: var(--cyber-dark);
            color: var(--cyber-light);
            line-height: 1.6;
            min-height: 100vh;
            padding: 20px;
            background-image:
                linear-gradient(rgba(0, 255, 255, 0.05) 1px, transparent 1px),
                linear-gradient(90deg, rgba(0, 255, 255, 0.05) 1px, transparent 1px);
            background-size: 50px 50px;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
        }
        header {
            text-align: center;
            padding: 60px 20px 40px;
            margin-bottom: 40px;
            background: rgba(10, 10, 18, 0.8);
            border: 2px solid var(--cyber-primary);
            border-radius: 10px;
            box-shadow: var(--neon-glow);
        }
        h1 {
            font-size: 3.5rem;
            margin-bottom: 20px;
            background: linear-gradient(45deg, var(--cyber-primary), var(--cyber-secondary));
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
            background-clip: text;
            letter-spacing: 3px;
            text-transform: uppercase;
        }
        .slogan {
            font-size: 1.4rem;
            color: var(--cyber-primary);
            margin-bottom: 25px;
            text-shadow: var(--neon-glow);
        }
        .search-box {
            max-width: 700px;
            margin: 0 auto;
        }
        .search-box input {
            width: 100%;
            padding: 18px 25px;
            font-size: 1.1rem;
            border: 2px solid var(--cyber-primary);
            border-radius: 10px;
            background: rgba(0, 0, 0, 0.7);
            color: var(--cyber-light);
            outline: none;
            font-family: 'Courier New', monospace;
        }
        .search-box input:focus {
            border-color: var(--cyber-secondary);
        }
        .status {
            text-align: center;
            padding: 20px;
            color: var(--cyber-primary);
            font-size: 1.1rem;
        }
        .grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(340px, 1fr));
            gap: 30px;
            margin-top: 20px;
        }
        .card {
            background: rgba(10, 10, 18, 0.8);
            border: 2px solid var(--cyber-primary);
            border-radius: 15px;
            padding: 28px;
            transition: all 0.3s ease;
            box-shadow: var(--neon-glow);
        }
        .card:hover {
            transform: translateY(-8px);
            border-color: var(--cyber-secondary);
        }
        .card .category {
            display: inline-block;
            background: rgba(0, 255, 255, 0.2);
            color: var(--cyber-primary);
            padding: 6px 14px;
            border-radius: 20px;
            font-size: 0.85rem;
            margin-bottom: 14px;
            border: 1px solid var(--cyber-primary);
        }
        .card h3 {
            font-size: 1.6rem;
            color: var(--cyber-secondary);
            margin-bottom: 12px;
        }
        .card p {
            margin-bottom: 18px;
        }
        .card a {
            display: inline-block;
            background: linear-gradient(45deg, var(--cyber-primary), var(--cyber-secondary));
            color: var(--cyber-darker);
            padding: 10px 22px;
            border-radius: 10px;
            text-decoration: none;
            font-weight: bold;
        }
        @media (max-width: 768px) {
            h1 { font-size: 2.2rem; }
            .grid { grid-template-columns: 1fr; }
        }
    </style>
</head>
<body>
    <div class="container">
        <header>
            <h1>Cyber AI Hub</h1>
            <p class="slogan">AI tool catalog, straight from the grid</p>
            <div class="search-box">
                <input type="text" id="searchInput" placeholder="Search AI tools..." autocomplete="off">
            </div>
        </header>

        <div class="status" id="status">Loading tools...</div>

        <main>
            <div class="grid" id="toolsGrid"></div>
        </main>
    </div>

    <script>
        function renderTools(data) {
            const grid = document.getElementById('toolsGrid');
            const status = document.getElementById('status');

            if (data && data.items && data.items.length > 0) {
                grid.innerHTML = '';
                data.items.forEach(tool => {
                    const card = document.createElement('div');
                    card.className = 'card';
                    card.innerHTML = `
                        <span class="category">${tool.category.replace('_', ' ').toUpperCase()}</span>
                        <h3>${tool.name}</h3>
                        <p>${tool.description}</p>
                        <a href="${tool.url}" target="_blank">Visit site</a>
                    `;
                    grid.appendChild(card);
                });
                status.textContent = `${data.items.length} tool(s) loaded`;
            } else {
                grid.innerHTML = '';
                status.textContent = 'No matching tools';
            }
        }

        async function loadTools() {
            try {
                const response = await fetch('/api/tools');
                renderTools(await response.json());
            } catch (error) {
                document.getElementById('status').textContent = 'Load failed: ' + error.message;
            }
        }

        document.getElementById('searchInput').addEventListener('input', async (e) => {
            const query = e.target.value.trim();
            if (query.length === 0) {
                loadTools();
                return;
            }
            try {
                const response = await fetch(`/api/search/${encodeURIComponent(query)}`);
                renderTools(await response.json());
            } catch (error) {
                document.getElementById('status').textContent = 'Search failed: ' + error.message;
            }
        });

        document.addEventListener('DOMContentLoaded', loadTools);
    </script>
</body>
</html>"#
}
