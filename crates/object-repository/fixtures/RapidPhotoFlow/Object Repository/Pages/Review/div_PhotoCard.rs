<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Individual photo card in the grid</description>
   <name>div_PhotoCard</name>
   <tag></tag>
   <elementGuidId>review-photo-card</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//div[contains(@class, 'card') and .//img]</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>[data-testid='photo-card'], .photo-card</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
